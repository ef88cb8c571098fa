//! Error type shared by the simulation.
//!
//! Every variant is a contract violation rather than a recoverable runtime
//! condition, so callers are expected to propagate it.

use thiserror::Error;

/// Errors raised by vector math, color decoding and configuration.
#[derive(Error, Debug)]
pub enum SimulationError {
    /// A vector was divided by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A zero-length vector was normalized.
    #[error("cannot normalize a zero-length vector")]
    ZeroVector,

    /// A color string is not of the form `#RRGGBB`.
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),

    /// Parameters describe an impossible simulation.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Reading or writing a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result alias used throughout the simulation.
pub type Result<T> = std::result::Result<T, SimulationError>;
