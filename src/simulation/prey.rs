//! Passive prey. Prey have no behavior of their own; predators move, prey wait.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::canvas::Canvas;
use super::color::Rgb;
use super::organism::{Locatable, Organism};
use super::render::{Drawable, RenderSink};

/// A prey item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prey {
    /// Body on the canvas.
    pub body: Organism,
}

impl Prey {
    /// Creates a prey at a random position on the canvas.
    pub fn spawn_random(canvas: &Canvas, radius: f32, color: Rgb, rng: &mut impl Rng) -> Self {
        Self {
            body: Organism::new(canvas.random_point(rng), radius, color),
        }
    }

    /// Marks the prey as eaten and parks it off the canvas so it can neither
    /// be caught again nor seen.
    pub fn kill(&mut self, canvas: &Canvas) {
        self.body.is_dead = true;
        self.body.position = canvas.off_canvas();
    }
}

impl Locatable for Prey {
    fn body(&self) -> &Organism {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Organism {
        &mut self.body
    }
}

impl Drawable for Prey {
    fn draw(&self, sink: &mut dyn RenderSink) {
        self.body.draw(sink);
    }
}
