//! Runs the simulation without a window and logs every generation.

use clap::Parser;
use predprey::simulation::ecosystem::{Ecosystem, StepOutcome};
use predprey::simulation::error::Result;
use predprey::simulation::params::Params;
use predprey::simulation::render::NullSink;

/// Headless predator/prey co-evolution.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON parameter file; defaults are used for missing fields.
    #[arg(long)]
    config: Option<String>,
    /// RNG seed, overriding the one in the config.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of generation transitions to run.
    #[arg(long, default_value_t = 50)]
    generations: u32,
    /// Hard stop on the total number of ticks.
    #[arg(long, default_value_t = 1_000_000)]
    max_ticks: u64,
    /// Write a JSON snapshot of the final state here.
    #[arg(long)]
    snapshot: Option<String>,
}

fn run(cli: &Cli) -> Result<()> {
    let mut params = match &cli.config {
        Some(path) => Params::load_from_file(path)?,
        None => Params::default(),
    };
    if cli.seed.is_some() {
        params.seed = cli.seed;
    }

    let mut ecosystem = Ecosystem::new(params)?;
    let mut sink = NullSink;
    let mut transitions = 0;

    while transitions < cli.generations && ecosystem.tick < cli.max_ticks {
        match ecosystem.step(&mut sink) {
            StepOutcome::Running => {}
            StepOutcome::NewGeneration(summary) => {
                transitions += 1;
                tracing::info!(
                    "generation {:>4} | {:>3} predators | {:>3} survivors | {:>2} mutated | speed {:.2} | sense {:.1}",
                    summary.generation,
                    summary.offspring,
                    summary.survivors,
                    summary.mutated_offspring,
                    summary.mean_speed.unwrap_or(0.0),
                    summary.mean_sense_distance.unwrap_or(0.0),
                );
            }
            StepOutcome::Extinct => break,
        }
    }

    tracing::info!(
        generation = ecosystem.generation(),
        ticks = ecosystem.tick,
        extinct = ecosystem.is_extinct(),
        "run finished"
    );

    if let Some(path) = &cli.snapshot {
        ecosystem.save_to_file(path)?;
        tracing::info!("snapshot written to {path}");
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
