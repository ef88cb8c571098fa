//! # Predprey - Predator/Prey Co-evolution
//!
//! A small evolutionary simulation of circular agents on a bounded 2D canvas.
//! Predators hunt passive prey, burn energy every tick, and reproduce between
//! generations depending on whether they fed and escaped to a canvas edge.
//!
//! ## Features
//!
//! - Per-predator decision logic (pursuit, edge seeking, wandering, escape)
//! - Generational natural selection with trait mutation (sense distance or speed)
//! - Lineage traits encoded in the predator tint
//! - Host-agnostic rendering through the [`simulation::render::RenderSink`] trait
//! - Seeded, reproducible runs and JSON snapshots
//!
//! ## Core Modules
//!
//! - [`simulation::vector`] - 2D vector math
//! - [`simulation::predator`] - Predator state machine and mutation
//! - [`simulation::population`] - Populations, nearest-prey search, natural selection
//! - [`simulation::ecosystem`] - Tick loop and generation transitions

/// Core simulation logic and data structures.
pub mod simulation {
    /// Viewport dimensions shared by every update.
    pub mod canvas;
    /// `#RRGGBB` color decoding and channel arithmetic.
    pub mod color;
    /// Tick loop tying predators and prey together.
    pub mod ecosystem;
    /// Error type shared by the simulation.
    pub mod error;
    /// Canvas edges and point-to-line distances.
    pub mod geometric_utils;
    /// Base record shared by every agent kind.
    ///
    /// The [`organism::Locatable`] trait gives uniform access to the
    /// [`organism::Organism`] embedded in predators and prey.
    pub mod organism;
    /// Simulation parameters.
    pub mod params;
    /// Homogeneous agent collections and the generational transition.
    pub mod population;
    /// Predator behavior, energy and mutation.
    pub mod predator;
    /// Passive prey.
    pub mod prey;
    /// Rendering collaborator interface.
    pub mod render;
    /// Per-generation reporting.
    pub mod stats;
    /// 2D vector value type.
    pub mod vector;
}
