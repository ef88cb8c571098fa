//! Tick loop tying predators and prey together.
//!
//! A host calls [`Ecosystem::step`] once per frame at any cadence. Each step
//! updates and draws predators, then prey, and when either population is all
//! dead it runs natural selection and respawns the prey.

use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::canvas::Canvas;
use super::color::Rgb;
use super::error::Result;
use super::params::Params;
use super::population::{PredatorPopulation, PreyPopulation};
use super::render::RenderSink;
use super::stats::{GenerationEnd, GenerationHistory, GenerationSummary};

/// What a call to [`Ecosystem::step`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// An ordinary tick inside the current generation.
    Running,
    /// The generation ended and a new one was spawned.
    NewGeneration(GenerationSummary),
    /// No predators are left; nothing was updated.
    Extinct,
}

/// The whole simulation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ecosystem {
    /// Parameters the ecosystem was created with.
    pub params: Params,
    /// Viewport the agents live in.
    pub canvas: Canvas,
    /// Current predator generation.
    pub predators: PredatorPopulation,
    /// Current prey generation.
    pub prey: PreyPopulation,
    /// Ticks since the simulation started.
    pub tick: u64,
    /// Ticks since the current generation started.
    pub generation_ticks: u64,
    /// Summaries of recent generation transitions.
    pub history: GenerationHistory,
    prey_color: Rgb,
    #[serde(skip, default = "entropy_rng")]
    rng: ChaCha12Rng,
    #[serde(skip)]
    extinction_reported: bool,
}

impl Ecosystem {
    /// Creates generation 0 from `params`.
    ///
    /// # Errors
    ///
    /// Fails if the parameters do not validate.
    pub fn new(params: Params) -> Result<Self> {
        params.validate()?;
        let mut rng = seeded_rng(params.seed);
        let canvas = params.canvas();
        let prey_color = params.prey_rgb()?;

        let predators =
            PredatorPopulation::spawn(params.n_predators, &canvas, params.predator_traits()?, &mut rng);
        let prey = PreyPopulation::spawn(
            params.n_prey,
            &canvas,
            params.prey_radius,
            prey_color,
            0,
            &mut rng,
        );

        info!(
            predators = predators.len(),
            prey = prey.len(),
            seed = ?params.seed,
            "simulation started"
        );

        Ok(Self {
            params,
            canvas,
            predators,
            prey,
            tick: 0,
            generation_ticks: 0,
            history: GenerationHistory::default(),
            prey_color,
            rng,
            extinction_reported: false,
        })
    }

    /// Current predator generation number.
    pub fn generation(&self) -> u32 {
        self.predators.generation
    }

    /// Whether the predators have died out for good.
    pub fn is_extinct(&self) -> bool {
        self.predators.is_empty()
    }

    /// Advances the simulation by one tick, issuing draw calls to `sink`.
    pub fn step(&mut self, sink: &mut dyn RenderSink) -> StepOutcome {
        if self.is_extinct() {
            if !self.extinction_reported {
                warn!(generation = self.generation(), "predators are extinct");
                self.extinction_reported = true;
            }
            return StepOutcome::Extinct;
        }

        sink.clear();
        self.predators
            .update(&mut self.prey, &self.canvas, &mut self.rng, sink);
        self.prey.update(sink);

        self.tick += 1;
        self.generation_ticks += 1;

        let ended_by = if self.predators.all_dead {
            GenerationEnd::PredatorsDead
        } else if self.prey.all_dead {
            GenerationEnd::PreyDead
        } else {
            return StepOutcome::Running;
        };

        StepOutcome::NewGeneration(self.next_generation(ended_by))
    }

    /// Replaces both populations and records the transition.
    fn next_generation(&mut self, ended_by: GenerationEnd) -> GenerationSummary {
        let prey_eaten = self.predators.organisms.iter().map(|p| p.prey_eaten).sum();
        let predators = self.predators.len();

        let selection =
            self.predators
                .natural_selection(&self.canvas, self.params.mutation_rate, &mut self.rng);
        let prey = self.prey.next_generation(
            &self.canvas,
            self.params.prey_radius,
            self.prey_color,
            &mut self.rng,
        );

        let mean = selection.next.mean_traits();
        let summary = GenerationSummary {
            generation: selection.next.generation,
            ended_by,
            ticks: self.generation_ticks,
            predators,
            prey_eaten,
            survivors: selection.survivors,
            offspring: selection.next.len(),
            mutated_offspring: selection.mutated,
            prey: prey.len(),
            mean_speed: mean.map(|(speed, _)| speed),
            mean_sense_distance: mean.map(|(_, sense)| sense),
        };

        info!(
            generation = summary.generation,
            ended_by = ?summary.ended_by,
            ticks = summary.ticks,
            survivors = summary.survivors,
            predators = summary.offspring,
            prey = summary.prey,
            "new generation"
        );

        self.predators = selection.next;
        self.prey = prey;
        self.generation_ticks = 0;
        self.history.record(summary.clone());
        summary
    }

    /// Saves the ecosystem state to a JSON file. The RNG state is not saved.
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads an ecosystem state from a JSON file and reseeds its RNG from
    /// `params.seed` (or entropy when unset).
    pub fn load_from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let mut ecosystem: Self = serde_json::from_str(&json)?;
        ecosystem.params.validate()?;
        ecosystem.rng = seeded_rng(ecosystem.params.seed);
        Ok(ecosystem)
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha12Rng {
    ChaCha12Rng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

fn entropy_rng() -> ChaCha12Rng {
    seeded_rng(None)
}
