//! Per-generation reporting.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Why a generation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationEnd {
    /// Every predator died.
    PredatorsDead,
    /// Every prey was eaten.
    PreyDead,
}

/// Summary of a finished generation and the one that replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Number of the generation that just started.
    pub generation: u32,
    /// What ended the previous generation.
    pub ended_by: GenerationEnd,
    /// Ticks the previous generation lasted.
    pub ticks: u64,
    /// Predators in the previous generation.
    pub predators: usize,
    /// Prey caught during the previous generation.
    pub prey_eaten: u32,
    /// Predators that qualified to reproduce.
    pub survivors: usize,
    /// Predators in the new generation.
    pub offspring: usize,
    /// New predators carrying a fresh mutation.
    pub mutated_offspring: usize,
    /// Prey in the new generation.
    pub prey: usize,
    /// Mean speed of the new predators, if any.
    pub mean_speed: Option<f32>,
    /// Mean sense distance of the new predators, if any.
    pub mean_sense_distance: Option<f32>,
}

/// Bounded record of recent generation summaries, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationHistory {
    summaries: VecDeque<GenerationSummary>,
    /// Maximum number of summaries kept.
    pub max_history: usize,
}

impl Default for GenerationHistory {
    fn default() -> Self {
        Self::new(500)
    }
}

impl GenerationHistory {
    /// Creates an empty history keeping at most `max_history` entries.
    pub fn new(max_history: usize) -> Self {
        Self {
            summaries: VecDeque::new(),
            max_history,
        }
    }

    /// Records a summary, dropping the oldest one when full.
    pub fn record(&mut self, summary: GenerationSummary) {
        self.summaries.push_back(summary);
        while self.summaries.len() > self.max_history {
            self.summaries.pop_front();
        }
    }

    /// Recorded summaries, oldest first.
    pub fn summaries(&self) -> &VecDeque<GenerationSummary> {
        &self.summaries
    }

    /// The most recent summary.
    pub fn latest(&self) -> Option<&GenerationSummary> {
        self.summaries.back()
    }

    /// Number of recorded summaries.
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// `(generation, value)` points for plotting one field.
    pub fn series(&self, value: impl Fn(&GenerationSummary) -> Option<f64>) -> Vec<(f64, f64)> {
        self.summaries
            .iter()
            .filter_map(|s| value(s).map(|v| (f64::from(s.generation), v)))
            .collect()
    }
}
