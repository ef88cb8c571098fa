//! Base record shared by predators and prey.

use serde::{Deserialize, Serialize};

use super::color::Rgb;
use super::render::{Drawable, RenderSink};
use super::vector::Vector2D;

/// A circular body on the canvas.
///
/// Owned exclusively by the population that created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organism {
    /// Center of the body.
    pub position: Vector2D,
    /// Body radius, always positive.
    pub radius: f32,
    /// Fill color.
    pub color: Rgb,
    /// Whether the organism has died (predators) or been eaten (prey).
    pub is_dead: bool,
}

impl Organism {
    /// Creates a living organism.
    pub fn new(position: Vector2D, radius: f32, color: Rgb) -> Self {
        Self {
            position,
            radius,
            color,
            is_dead: false,
        }
    }

    /// Euclidean distance between the two centers.
    pub fn dist(&self, other: &Organism) -> f32 {
        self.position.distance(other.position)
    }
}

impl Drawable for Organism {
    fn draw(&self, sink: &mut dyn RenderSink) {
        sink.fill_circle(self.position, self.radius, self.color);
    }
}

/// Uniform access to the [`Organism`] embedded in every agent kind.
pub trait Locatable {
    /// The embedded base record.
    fn body(&self) -> &Organism;

    /// Mutable access to the embedded base record.
    fn body_mut(&mut self) -> &mut Organism;

    /// Center of the body.
    fn pos(&self) -> Vector2D {
        self.body().position
    }

    /// Whether the agent is dead.
    fn is_dead(&self) -> bool {
        self.body().is_dead
    }
}

impl Locatable for Organism {
    fn body(&self) -> &Organism {
        self
    }

    fn body_mut(&mut self) -> &mut Organism {
        self
    }
}
