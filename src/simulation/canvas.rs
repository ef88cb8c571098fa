//! Viewport context shared by every update.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::vector::Vector2D;

/// Fixed-size drawing area the agents live in.
///
/// Dimensions must not change during a generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Width in canvas units.
    pub width: f32,
    /// Height in canvas units.
    pub height: f32,
}

impl Canvas {
    /// Creates a canvas of the given size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Uniformly random point inside the canvas.
    pub fn random_point(&self, rng: &mut impl Rng) -> Vector2D {
        Vector2D::new(
            rng.random::<f32>() * self.width,
            rng.random::<f32>() * self.height,
        )
    }

    /// A point well outside the canvas, used to park captured prey.
    pub fn off_canvas(&self) -> Vector2D {
        Vector2D::new(-2.0 * self.width, -2.0 * self.height)
    }

    /// Whether `point` lies inside the canvas bounds.
    pub fn contains(&self, point: Vector2D) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}
