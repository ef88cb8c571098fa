//! Predator behavior, energy and mutation.
//!
//! Each tick a living predator runs a small priority-ordered decision:
//! catch the target if it is close enough, chase it if it is sensed and the
//! predator is still hungry, otherwise react to the first sensed canvas edge,
//! and wander when nothing is in range.

use std::f32::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::canvas::Canvas;
use super::color::{Channel, Rgb};
use super::geometric_utils::{Edge, clamp_to_canvas};
use super::organism::{Locatable, Organism};
use super::prey::Prey;
use super::render::{Drawable, RenderSink};
use super::vector::Vector2D;

/// Extra reach beyond the body radius within which prey is caught.
pub const CAPTURE_MARGIN: f32 = 0.5;
/// Number of prey after which a predator stops hunting and heads for an edge.
pub const PREY_CAP: u32 = 2;
/// Speed at which the movement cost is smallest.
pub const BASELINE_SPEED: f32 = 3.0;
/// Multiplier applied to the mutated trait.
pub const MUTATION_FACTOR: f32 = 1.1;
/// Amount added to the color channel that encodes a mutated trait.
pub const COLOR_SHIFT: u8 = 32;

// absorbs rounding when the body is clamped flush against the far edges
const EDGE_TOLERANCE: f32 = 1e-3;

/// Heritable traits a predator is born with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredatorTraits {
    /// Body radius.
    pub radius: f32,
    /// Body tint; red and blue record speed and sense mutations.
    pub color: Rgb,
    /// Energy at birth.
    pub max_energy: f32,
    /// Radius within which prey and edges are detected.
    pub sense_distance: f32,
    /// Displacement per tick.
    pub speed: f32,
}

/// What a predator did during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Movement {
    /// Energy ran out; the predator is now dead and did nothing.
    Died,
    /// Already dead before the tick.
    Inert,
    /// Survivor waiting at the edge.
    Resting,
    /// Steered towards the target prey along this direction.
    Pursue(Vector2D),
    /// Fed predator heading for this edge.
    SeekEdge(Edge),
    /// Fed predator reached this edge and became a survivor.
    Escape(Edge),
    /// Hungry predator turning away from this edge.
    AvoidEdge(Edge, Vector2D),
    /// Nothing in range; random heading.
    Wander(Vector2D),
}

/// Trait upgraded by a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Sense distance grew, blue channel shifted.
    SenseDistance,
    /// Speed grew, red channel shifted.
    Speed,
}

/// A hunting agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predator {
    /// Body on the canvas.
    pub body: Organism,
    /// Current velocity; persists between ticks and gives turns inertia.
    pub velocity: Vector2D,
    /// Remaining energy. The predator dies once it is at most 1.
    pub energy: f32,
    /// Energy at birth, inherited by offspring.
    pub max_energy: f32,
    /// Radius within which prey and edges are detected.
    pub sense_distance: f32,
    /// Displacement per tick.
    pub speed: f32,
    /// Prey caught this generation.
    pub prey_eaten: u32,
    /// Reached an edge after feeding; qualifies for reproduction.
    pub is_survivor: bool,
}

impl Predator {
    /// Creates a predator at `position` heading along `velocity`.
    pub fn new(position: Vector2D, velocity: Vector2D, traits: PredatorTraits) -> Self {
        Self {
            body: Organism::new(position, traits.radius, traits.color),
            velocity,
            energy: traits.max_energy,
            max_energy: traits.max_energy,
            sense_distance: traits.sense_distance,
            speed: traits.speed,
            prey_eaten: 0,
            is_survivor: false,
        }
    }

    /// Creates a predator at a random point on a random canvas edge with a
    /// random heading.
    pub fn spawn_on_edge(canvas: &Canvas, traits: PredatorTraits, rng: &mut impl Rng) -> Self {
        let position = random_edge_point(canvas, traits.radius, rng);
        let velocity = Vector2D::from_angle(rng.random_range(0.0..TAU)) * traits.speed;
        Self::new(position, velocity, traits)
    }

    /// Heritable traits of this predator.
    pub fn traits(&self) -> PredatorTraits {
        PredatorTraits {
            radius: self.body.radius,
            color: self.body.color,
            max_energy: self.max_energy,
            sense_distance: self.sense_distance,
            speed: self.speed,
        }
    }

    /// A newborn copy: same traits and tint, fresh position, heading and energy.
    pub fn offspring(&self, canvas: &Canvas, rng: &mut impl Rng) -> Self {
        Self::spawn_on_edge(canvas, self.traits(), rng)
    }

    /// Advances the predator by one tick against its current target.
    ///
    /// `target` is the nearest prey, or `None` when there is no prey at all.
    pub fn update(
        &mut self,
        mut target: Option<&mut Prey>,
        canvas: &Canvas,
        rng: &mut impl Rng,
    ) -> Movement {
        if self.body.is_dead {
            return Movement::Inert;
        }
        if self.energy <= 1.0 {
            self.body.is_dead = true;
            debug!(prey_eaten = self.prey_eaten, survivor = self.is_survivor, "predator starved");
            return Movement::Died;
        }
        if self.is_survivor {
            self.update_energy();
            return Movement::Resting;
        }

        if let Some(prey) = target.as_deref_mut() {
            self.try_capture(prey, canvas);
        }

        let movement = self.decide(target.as_deref(), canvas, rng);
        match movement {
            Movement::Pursue(direction)
            | Movement::AvoidEdge(_, direction)
            | Movement::Wander(direction) => self.steer(direction, canvas),
            Movement::SeekEdge(edge) => self.steer(edge.outward(), canvas),
            Movement::Escape(edge) => {
                self.is_survivor = true;
                debug!(?edge, prey_eaten = self.prey_eaten, "predator escaped");
            }
            Movement::Died | Movement::Inert | Movement::Resting => {}
        }

        self.update_energy();
        movement
    }

    /// Catches `prey` if its center is within reach.
    fn try_capture(&mut self, prey: &mut Prey, canvas: &Canvas) {
        if prey.is_dead() {
            return;
        }
        if self.body.dist(&prey.body) <= self.body.radius + CAPTURE_MARGIN {
            prey.kill(canvas);
            self.prey_eaten += 1;
            debug!(prey_eaten = self.prey_eaten, "prey captured");
        }
    }

    fn decide(&self, target: Option<&Prey>, canvas: &Canvas, rng: &mut impl Rng) -> Movement {
        if let Some(prey) = target.filter(|prey| !prey.is_dead()) {
            let distance = self.body.dist(&prey.body);
            if distance <= self.sense_distance && self.prey_eaten < PREY_CAP {
                return Movement::Pursue(prey.pos() - self.pos());
            }
        }

        let position = self.pos();
        let sensed = Edge::ALL
            .into_iter()
            .map(|edge| (edge, edge.distance(position, canvas)))
            .find(|&(_, distance)| distance <= self.sense_distance);

        match sensed {
            Some((edge, distance)) if self.prey_eaten > 0 => {
                if distance <= self.body.radius + EDGE_TOLERANCE {
                    Movement::Escape(edge)
                } else {
                    Movement::SeekEdge(edge)
                }
            }
            Some((edge, _)) => Movement::AvoidEdge(edge, away_from(edge, rng)),
            None => Movement::Wander(Vector2D::from_angle(rng.random_range(0.0..TAU))),
        }
    }

    /// Blends `direction` into the current heading at constant speed, moves,
    /// and clamps the body inside the canvas.
    fn steer(&mut self, direction: Vector2D, canvas: &Canvas) {
        // an exactly opposing direction cancels out; keep the old heading then
        if let Ok(heading) = (self.velocity + direction).normalize() {
            self.velocity = heading * self.speed;
        }
        let moved = self.body.position + self.velocity;
        self.body.position = clamp_to_canvas(moved, self.body.radius, canvas);
    }

    /// Energy spent per tick: a sensing cost growing with body size plus a
    /// movement cost that is smallest at [`BASELINE_SPEED`].
    pub fn energy_cost(&self) -> f32 {
        let sensing = 0.25 * self.body.radius + 0.25;
        let movement = 0.5 * (self.speed - BASELINE_SPEED).powi(2) + 1.0;
        sensing + movement
    }

    /// Charges one tick of [`Self::energy_cost`].
    pub fn update_energy(&mut self) {
        self.energy -= self.energy_cost();
    }

    /// With probability `mutation_rate`, upgrades either sense distance or
    /// speed (even odds) by [`MUTATION_FACTOR`] and shifts the matching color
    /// channel (blue for sense, red for speed) by [`COLOR_SHIFT`].
    pub fn mutate(&mut self, mutation_rate: f64, rng: &mut impl Rng) -> Option<Mutation> {
        if rng.random::<f64>() >= mutation_rate {
            return None;
        }

        let mutation = if rng.random_bool(0.5) {
            self.sense_distance *= MUTATION_FACTOR;
            self.body.color = self.body.color.brighten_channel(Channel::Blue, COLOR_SHIFT);
            Mutation::SenseDistance
        } else {
            self.speed *= MUTATION_FACTOR;
            self.body.color = self.body.color.brighten_channel(Channel::Red, COLOR_SHIFT);
            Mutation::Speed
        };
        debug!(
            ?mutation,
            sense_distance = self.sense_distance,
            speed = self.speed,
            color = %self.body.color,
            "predator mutated"
        );
        Some(mutation)
    }
}

impl Locatable for Predator {
    fn body(&self) -> &Organism {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Organism {
        &mut self.body
    }
}

impl Drawable for Predator {
    fn draw(&self, sink: &mut dyn RenderSink) {
        self.body.draw(sink);
        sink.stroke_circle(self.body.position, self.sense_distance, self.body.color);
        if let Ok(heading) = self.velocity.normalize() {
            let tip = self.body.position + heading * (2.0 * self.body.radius);
            sink.line(self.body.position, tip, self.body.color);
        }
    }
}

/// Random direction pointing back into the canvas from `edge`, with lateral jitter.
fn away_from(edge: Edge, rng: &mut impl Rng) -> Vector2D {
    let inward = -edge.outward();
    let lateral = Vector2D::new(inward.y, inward.x);
    inward * rng.random_range(0.0_f32..1.0) + lateral * rng.random_range(-1.0_f32..1.0)
}

fn random_edge_point(canvas: &Canvas, radius: f32, rng: &mut impl Rng) -> Vector2D {
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    let along_x = rng.random::<f32>() * canvas.width;
    let along_y = rng.random::<f32>() * canvas.height;
    let point = match edge {
        Edge::Left => Vector2D::new(0.0, along_y),
        Edge::Right => Vector2D::new(canvas.width, along_y),
        Edge::Top => Vector2D::new(along_x, 0.0),
        Edge::Bottom => Vector2D::new(along_x, canvas.height),
    };
    clamp_to_canvas(point, radius, canvas)
}
