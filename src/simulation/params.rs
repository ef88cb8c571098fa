use serde::{Deserialize, Serialize};

use super::canvas::Canvas;
use super::color::Rgb;
use super::error::{Result, SimulationError};
use super::predator::PredatorTraits;

/// Simulation parameters that control the ecosystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Canvas width.
    pub canvas_width: f32,
    /// Canvas height.
    pub canvas_height: f32,
    /// Predators in the first generation.
    pub n_predators: usize,
    /// Prey per generation.
    pub n_prey: usize,
    /// Predator body radius.
    pub predator_radius: f32,
    /// Prey body radius.
    pub prey_radius: f32,
    /// Energy a predator is born with.
    pub predator_energy: f32,
    /// Initial predator sense distance.
    pub sense_distance: f32,
    /// Initial predator speed (displacement per tick).
    pub speed: f32,
    /// Probability that the second offspring of a successful hunter mutates.
    pub mutation_rate: f64,
    /// Initial predator tint as `#RRGGBB`.
    pub predator_color: String,
    /// Prey tint as `#RRGGBB`.
    pub prey_color: String,
    /// RNG seed. `None` draws a fresh seed on startup.
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            n_predators: 12,
            n_prey: 40,
            predator_radius: 8.0,
            prey_radius: 4.0,
            predator_energy: 1500.0,
            sense_distance: 100.0,
            speed: 3.0,
            mutation_rate: 0.1,
            predator_color: "#204080".to_string(),
            prey_color: "#40c040".to_string(),
            seed: None,
        }
    }
}

impl Params {
    /// Canvas described by these parameters.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.canvas_width, self.canvas_height)
    }

    /// Traits of a first-generation predator.
    ///
    /// # Errors
    ///
    /// Fails if `predator_color` is not a valid `#RRGGBB` string.
    pub fn predator_traits(&self) -> Result<PredatorTraits> {
        Ok(PredatorTraits {
            radius: self.predator_radius,
            color: Rgb::from_hex(&self.predator_color)?,
            max_energy: self.predator_energy,
            sense_distance: self.sense_distance,
            speed: self.speed,
        })
    }

    /// Decoded prey tint.
    ///
    /// # Errors
    ///
    /// Fails if `prey_color` is not a valid `#RRGGBB` string.
    pub fn prey_rgb(&self) -> Result<Rgb> {
        Rgb::from_hex(&self.prey_color)
    }

    /// Rejects parameters that cannot describe a running simulation.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParams`] for non-positive sizes or
    /// an out-of-range mutation rate, and [`SimulationError::InvalidColorFormat`]
    /// for a malformed tint.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("predator_radius", self.predator_radius),
            ("prey_radius", self.prey_radius),
            ("predator_energy", self.predator_energy),
            ("sense_distance", self.sense_distance),
            ("speed", self.speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimulationError::InvalidParams(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.n_predators == 0 || self.n_prey == 0 {
            return Err(SimulationError::InvalidParams(
                "both populations need at least one member".to_string(),
            ));
        }
        if 2.0 * self.predator_radius > self.canvas_width.min(self.canvas_height) {
            return Err(SimulationError::InvalidParams(
                "predator does not fit on the canvas".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SimulationError::InvalidParams(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }

        self.predator_traits()?;
        self.prey_rgb()?;
        Ok(())
    }

    /// Loads parameters from a JSON file. Missing fields take their defaults.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Saves the parameters as pretty JSON.
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
