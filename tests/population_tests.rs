#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use predprey::simulation::canvas::Canvas;
use predprey::simulation::color::Rgb;
use predprey::simulation::organism::{Locatable, Organism};
use predprey::simulation::population::{
    PredatorPopulation, PreyPopulation, Population, nearest_prey,
};
use predprey::simulation::predator::{Predator, PredatorTraits};
use predprey::simulation::prey::Prey;
use predprey::simulation::render::{NullSink, RenderSink};
use predprey::simulation::vector::Vector2D;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

const CANVAS: Canvas = Canvas::new(800.0, 600.0);
const PREY_COLOR: Rgb = Rgb::new(64, 192, 64);

#[derive(Default)]
struct CountingSink {
    clears: usize,
    filled: usize,
    stroked: usize,
    lines: usize,
}

impl RenderSink for CountingSink {
    fn clear(&mut self) {
        self.clears += 1;
    }

    fn fill_circle(&mut self, _center: Vector2D, _radius: f32, _color: Rgb) {
        self.filled += 1;
    }

    fn stroke_circle(&mut self, _center: Vector2D, _radius: f32, _color: Rgb) {
        self.stroked += 1;
    }

    fn line(&mut self, _from: Vector2D, _to: Vector2D, _color: Rgb) {
        self.lines += 1;
    }
}

fn traits() -> PredatorTraits {
    PredatorTraits {
        radius: 8.0,
        color: Rgb::new(32, 64, 128),
        max_energy: 1000.0,
        sense_distance: 100.0,
        speed: 3.0,
    }
}

fn prey_at(x: f32, y: f32) -> Prey {
    Prey {
        body: Organism::new(Vector2D::new(x, y), 4.0, PREY_COLOR),
    }
}

fn survivor(prey_eaten: u32) -> Predator {
    let mut predator = Predator::new(Vector2D::new(8.0, 300.0), Vector2D::new(3.0, 0.0), traits());
    predator.prey_eaten = prey_eaten;
    predator.is_survivor = true;
    predator.body.is_dead = true;
    predator
}

fn rng() -> ChaCha12Rng {
    ChaCha12Rng::seed_from_u64(42)
}

#[test]
fn test_nearest_prey_scans_all_prey() {
    let prey = vec![prey_at(100.0, 100.0), prey_at(50.0, 50.0), prey_at(300.0, 300.0)];
    assert_eq!(nearest_prey(Vector2D::new(40.0, 40.0), &prey), Some(1));
    assert_eq!(nearest_prey(Vector2D::new(290.0, 310.0), &prey), Some(2));
}

#[test]
fn test_nearest_prey_ties_go_to_first_index() {
    let prey = vec![prey_at(90.0, 100.0), prey_at(110.0, 100.0)];
    assert_eq!(nearest_prey(Vector2D::new(100.0, 100.0), &prey), Some(0));
}

#[test]
fn test_nearest_prey_includes_dead_prey() {
    let mut prey = vec![prey_at(100.0, 100.0)];
    prey[0].kill(&CANVAS);
    assert_eq!(nearest_prey(Vector2D::new(100.0, 100.0), &prey), Some(0));
}

#[test]
fn test_nearest_prey_of_empty_population() {
    assert_eq!(nearest_prey(Vector2D::new(1.0, 1.0), &[]), None);
}

#[test]
fn test_spawned_predators_start_on_edges() {
    let mut rng = rng();
    let predators = PredatorPopulation::spawn(20, &CANVAS, traits(), &mut rng);

    assert_eq!(predators.size, 20);
    assert_eq!(predators.len(), 20);
    assert_eq!(predators.generation, 0);
    assert!(!predators.all_dead);
    for predator in &predators.organisms {
        let p = predator.pos();
        let touching = p.x == 8.0 || p.x == 792.0 || p.y == 8.0 || p.y == 592.0;
        assert!(touching, "{p:?} is not on an edge");
        assert_eq!(predator.energy, 1000.0);
    }
}

#[test]
fn test_natural_selection_clones_and_mutates_survivors() {
    let mut rng = rng();
    let mut dead = survivor(0);
    dead.is_survivor = false;
    let mut fed_but_stranded = survivor(2);
    fed_but_stranded.is_survivor = false;

    let population = Population::from_organisms(
        vec![survivor(1), survivor(2), dead, fed_but_stranded],
        4,
    );

    let selection = population.natural_selection(&CANVAS, 0.1, &mut rng);

    assert_eq!(selection.next.len(), 3);
    assert_eq!(selection.next.size, 3);
    assert_eq!(selection.next.generation, 5);
    assert_eq!(selection.survivors, 2);
    assert!(selection.mutated <= 1);
    for child in &selection.next.organisms {
        assert_eq!(child.prey_eaten, 0);
        assert!(!child.is_survivor);
        assert!(!child.is_dead());
        assert_eq!(child.energy, child.max_energy);
    }
    // the first two children are plain clones
    assert_eq!(selection.next.organisms[0].traits(), traits());
    assert_eq!(selection.next.organisms[1].traits(), traits());
}

#[test]
fn test_natural_selection_always_mutating() {
    let mut rng = rng();
    let population = Population::from_organisms(vec![survivor(3)], 0);

    let selection = population.natural_selection(&CANVAS, 1.0, &mut rng);

    assert_eq!(selection.next.len(), 2);
    assert_eq!(selection.mutated, 1);
    assert_eq!(selection.next.organisms[0].traits(), traits());
    assert_ne!(selection.next.organisms[1].traits(), traits());
}

#[test]
fn test_natural_selection_can_go_extinct() {
    let mut rng = rng();
    let mut loser = survivor(0);
    loser.is_survivor = false;
    let population = Population::from_organisms(vec![loser], 2);

    let selection = population.natural_selection(&CANVAS, 0.1, &mut rng);

    assert!(selection.next.is_empty());
    assert_eq!(selection.next.size, 0);
    assert_eq!(selection.next.generation, 3);
    assert!(selection.next.all_dead);
}

#[test]
fn test_predator_update_hunts_nearest_prey_and_draws() {
    let mut rng = rng();
    let hunter = Predator::new(Vector2D::new(400.0, 300.0), Vector2D::new(3.0, 0.0), traits());
    let mut predators = Population::from_organisms(vec![hunter], 0);
    let mut prey = Population::from_organisms(vec![prey_at(600.0, 300.0), prey_at(405.0, 300.0)], 0);
    let mut sink = CountingSink::default();

    predators.update(&mut prey, &CANVAS, &mut rng, &mut sink);

    assert!(prey.organisms[1].is_dead());
    assert!(!prey.organisms[0].is_dead());
    assert_eq!(predators.organisms[0].prey_eaten, 1);
    assert!(!predators.all_dead);
    assert_eq!(sink.filled, 1);
    assert_eq!(sink.stroked, 1);
    assert_eq!(sink.lines, 1);
}

#[test]
fn test_predator_update_without_prey() {
    let mut rng = rng();
    let mut predators = PredatorPopulation::spawn(5, &CANVAS, traits(), &mut rng);
    let mut prey = Population::from_organisms(Vec::<Prey>::new(), 0);

    predators.update(&mut prey, &CANVAS, &mut rng, &mut NullSink);

    assert!(!predators.all_dead);
    assert!(predators.organisms.iter().all(|p| p.energy < 1000.0));
}

#[test]
fn test_predator_population_all_dead() {
    let mut rng = rng();
    let mut predators = PredatorPopulation::spawn(4, &CANVAS, traits(), &mut rng);
    let mut prey = PreyPopulation::spawn(3, &CANVAS, 4.0, PREY_COLOR, 0, &mut rng);

    predators.organisms[0].energy = 0.5;
    predators.update(&mut prey, &CANVAS, &mut rng, &mut NullSink);
    assert!(!predators.all_dead);
    assert_eq!(predators.alive_count(), 3);

    for predator in &mut predators.organisms {
        predator.energy = 1.0;
    }
    predators.update(&mut prey, &CANVAS, &mut rng, &mut NullSink);
    assert!(predators.all_dead);
    assert_eq!(predators.alive_count(), 0);
}

#[test]
fn test_prey_update_draws_and_tracks_deaths() {
    let mut rng = rng();
    let mut prey = PreyPopulation::spawn(6, &CANVAS, 4.0, PREY_COLOR, 0, &mut rng);
    let mut sink = CountingSink::default();

    prey.update(&mut sink);
    assert_eq!(sink.filled, 6);
    assert_eq!(sink.clears, 0);
    assert!(!prey.all_dead);

    for p in &mut prey.organisms {
        p.kill(&CANVAS);
    }
    prey.update(&mut sink);
    assert!(prey.all_dead);
}

#[test]
fn test_prey_next_generation_keeps_size() {
    let mut rng = rng();
    let mut prey = PreyPopulation::spawn(10, &CANVAS, 4.0, PREY_COLOR, 3, &mut rng);
    for p in &mut prey.organisms {
        p.kill(&CANVAS);
    }
    prey.update(&mut NullSink);

    let next = prey.next_generation(&CANVAS, 4.0, PREY_COLOR, &mut rng);

    assert_eq!(next.size, 10);
    assert_eq!(next.len(), 10);
    assert_eq!(next.generation, 4);
    assert!(!next.all_dead);
    assert!(next.organisms.iter().all(|p| CANVAS.contains(p.pos())));
}

#[test]
fn test_mean_traits() {
    let mut slow = survivor(1);
    slow.speed = 2.0;
    slow.sense_distance = 80.0;
    let mut fast = survivor(1);
    fast.speed = 4.0;
    fast.sense_distance = 120.0;

    let population = Population::from_organisms(vec![slow, fast], 0);
    assert_eq!(population.mean_traits(), Some((3.0, 100.0)));

    let empty = Population::from_organisms(Vec::<Predator>::new(), 0);
    assert_eq!(empty.mean_traits(), None);
}
