//! Homogeneous agent collections and the generational transition.
//!
//! Predators and prey live in separate populations. A population is never
//! edited across generations; natural selection builds a replacement.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::canvas::Canvas;
use super::color::Rgb;
use super::organism::Locatable;
use super::predator::{Predator, PredatorTraits};
use super::prey::Prey;
use super::render::{Drawable, RenderSink};
use super::vector::Vector2D;

/// The agents of one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Population<T> {
    /// Number of agents the generation started with.
    pub size: usize,
    /// The agents; index order is stable within a generation.
    pub organisms: Vec<T>,
    /// Whether every agent was dead after the last update.
    pub all_dead: bool,
    /// Generation number, starting at 0.
    pub generation: u32,
}

/// Population of predators.
pub type PredatorPopulation = Population<Predator>;
/// Population of prey.
pub type PreyPopulation = Population<Prey>;

impl<T: Locatable> Population<T> {
    /// Wraps `organisms` as generation `generation`.
    pub fn from_organisms(organisms: Vec<T>, generation: u32) -> Self {
        let mut population = Self {
            size: organisms.len(),
            organisms,
            all_dead: false,
            generation,
        };
        population.refresh_all_dead();
        population
    }

    /// Number of agents.
    pub fn len(&self) -> usize {
        self.organisms.len()
    }

    /// Whether the population has no agents at all.
    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    /// Number of agents that are not dead.
    pub fn alive_count(&self) -> usize {
        self.organisms.iter().filter(|o| !o.is_dead()).count()
    }

    /// Recomputes [`Self::all_dead`]. An empty population counts as dead.
    pub fn refresh_all_dead(&mut self) {
        self.all_dead = self.organisms.iter().all(Locatable::is_dead);
    }
}

/// Index of the prey closest to `position`, dead or alive.
///
/// Ties go to the lowest index. Returns `None` when `prey` is empty.
pub fn nearest_prey(position: Vector2D, prey: &[Prey]) -> Option<usize> {
    let mut nearest = None;
    let mut best = f32::INFINITY;
    for (i, candidate) in prey.iter().enumerate() {
        let distance = position.distance(candidate.pos());
        if distance < best {
            best = distance;
            nearest = Some(i);
        }
    }
    nearest
}

/// Result of one round of natural selection.
#[derive(Debug, Clone)]
pub struct Selection {
    /// The next predator generation.
    pub next: PredatorPopulation,
    /// Parents that qualified as survivors.
    pub survivors: usize,
    /// Offspring whose mutation roll succeeded.
    pub mutated: usize,
}

impl Population<Predator> {
    /// First generation: `n` predators on random canvas edges.
    pub fn spawn(n: usize, canvas: &Canvas, traits: PredatorTraits, rng: &mut impl Rng) -> Self {
        let organisms = (0..n)
            .map(|_| Predator::spawn_on_edge(canvas, traits, rng))
            .collect();
        Self::from_organisms(organisms, 0)
    }

    /// One tick: every predator targets its nearest prey, updates, and is drawn.
    pub fn update(
        &mut self,
        prey: &mut PreyPopulation,
        canvas: &Canvas,
        rng: &mut impl Rng,
        sink: &mut dyn RenderSink,
    ) {
        for predator in &mut self.organisms {
            let target = nearest_prey(predator.pos(), &prey.organisms)
                .map(|i| &mut prey.organisms[i]);
            predator.update(target, canvas, rng);
            predator.draw(sink);
        }
        self.refresh_all_dead();
    }

    /// Builds the next generation from the survivors.
    ///
    /// A survivor that ate one prey leaves one unmutated offspring. One that
    /// ate more leaves an unmutated offspring plus a second that rolls for a
    /// mutation with `mutation_rate`. Everyone else leaves nothing, so the
    /// population may shrink to zero.
    pub fn natural_selection(
        &self,
        canvas: &Canvas,
        mutation_rate: f64,
        rng: &mut impl Rng,
    ) -> Selection {
        let mut next = Vec::new();
        let mut survivors = 0;
        let mut mutated = 0;

        for parent in self.organisms.iter().filter(|p| p.is_survivor) {
            match parent.prey_eaten {
                0 => continue,
                1 => next.push(parent.offspring(canvas, rng)),
                _ => {
                    next.push(parent.offspring(canvas, rng));
                    let mut child = parent.offspring(canvas, rng);
                    if child.mutate(mutation_rate, rng).is_some() {
                        mutated += 1;
                    }
                    next.push(child);
                }
            }
            survivors += 1;
        }

        debug!(
            generation = self.generation + 1,
            survivors,
            offspring = next.len(),
            mutated,
            "natural selection"
        );

        Selection {
            next: Self::from_organisms(next, self.generation + 1),
            survivors,
            mutated,
        }
    }

    /// Mean `(speed, sense_distance)` over the population, if it is not empty.
    pub fn mean_traits(&self) -> Option<(f32, f32)> {
        if self.is_empty() {
            return None;
        }
        let n = self.len() as f32;
        let speed = self.organisms.iter().map(|p| p.speed).sum::<f32>() / n;
        let sense = self.organisms.iter().map(|p| p.sense_distance).sum::<f32>() / n;
        Some((speed, sense))
    }
}

impl Population<Prey> {
    /// `n` prey at random positions as generation `generation`.
    pub fn spawn(
        n: usize,
        canvas: &Canvas,
        radius: f32,
        color: Rgb,
        generation: u32,
        rng: &mut impl Rng,
    ) -> Self {
        let organisms = (0..n)
            .map(|_| Prey::spawn_random(canvas, radius, color, rng))
            .collect();
        Self::from_organisms(organisms, generation)
    }

    /// Draws every prey and recomputes [`Self::all_dead`].
    pub fn update(&mut self, sink: &mut dyn RenderSink) {
        for prey in &self.organisms {
            prey.draw(sink);
        }
        self.refresh_all_dead();
    }

    /// A fresh, randomly placed population of the same size.
    pub fn next_generation(
        &self,
        canvas: &Canvas,
        radius: f32,
        color: Rgb,
        rng: &mut impl Rng,
    ) -> Self {
        Self::spawn(self.size, canvas, radius, color, self.generation + 1, rng)
    }
}
