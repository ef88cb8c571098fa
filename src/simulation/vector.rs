//! 2D vector value type used for positions, velocities and directions.
//!
//! All operations return new vectors; the receiver is never mutated.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::error::{Result, SimulationError};

/// A point or direction in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    /// Horizontal component, growing to the right.
    pub x: f32,
    /// Vertical component, growing downwards.
    pub y: f32,
}

impl Vector2D {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a vector from its components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at angle `theta` (radians), i.e. `(cos θ, sin θ)`.
    pub fn from_angle(theta: f32) -> Self {
        Self::new(theta.cos(), theta.sin())
    }

    /// Component-wise sum.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference `self - other`.
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Scales both components by `scalar`.
    pub fn multiply(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Divides both components by `scalar`.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::DivisionByZero`] when `scalar == 0`.
    pub fn divide(self, scalar: f32) -> Result<Self> {
        if scalar == 0.0 {
            return Err(SimulationError::DivisionByZero);
        }
        Ok(Self::new(self.x / scalar, self.y / scalar))
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length.
    pub fn magnitude(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Unit vector with the same direction.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::ZeroVector`] when the magnitude is zero.
    pub fn normalize(self) -> Result<Self> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(SimulationError::ZeroVector);
        }
        self.divide(magnitude)
    }

    /// Euclidean distance between the two points.
    pub fn distance(self, other: Self) -> f32 {
        self.subtract(other).magnitude()
    }

    /// Exact component-wise equality.
    pub fn equals(self, other: Self) -> bool {
        self == other
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.add(rhs)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.multiply(rhs)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
