//! Windowed predator/prey simulation with an egui stats panel.

use clap::Parser;
use macroquad::prelude::*;
use predprey::simulation::ecosystem::{Ecosystem, StepOutcome};
use predprey::simulation::error::Result;
use predprey::simulation::params::Params;
use predprey::simulation::render::{Drawable, NullSink, RenderSink};

mod graphics;
mod ui;

/// Windowed predator/prey co-evolution.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON parameter file; defaults are used for missing fields.
    #[arg(long)]
    config: Option<String>,
    /// RNG seed, overriding the one in the config.
    #[arg(long)]
    seed: Option<u64>,
    /// Where the Save button writes the snapshot.
    #[arg(long, default_value = "predprey_snapshot.json")]
    snapshot: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Predators & Prey".to_owned(),
        window_width: 1100,
        window_height: 620,
        ..Default::default()
    }
}

fn load_params(cli: &Cli) -> Result<Params> {
    let mut params = match &cli.config {
        Some(path) => Params::load_from_file(path)?,
        None => Params::default(),
    };
    if cli.seed.is_some() {
        params.seed = cli.seed;
    }
    Ok(params)
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let mut ecosystem = match load_params(&cli).and_then(Ecosystem::new) {
        Ok(ecosystem) => ecosystem,
        Err(e) => {
            tracing::error!("failed to start simulation: {e}");
            std::process::exit(1);
        }
    };

    let mut ui_state = ui::UIState::new();

    loop {
        if ui_state.reset_requested {
            ui_state.reset_requested = false;
            match Ecosystem::new(ecosystem.params.clone()) {
                Ok(fresh) => {
                    ecosystem = fresh;
                    ui_state.status_message = Some("Simulation reset".to_string());
                }
                Err(e) => ui_state.status_message = Some(format!("Reset failed: {e}")),
            }
        }

        if ui_state.save_requested {
            ui_state.save_requested = false;
            ui_state.status_message = Some(match ecosystem.save_to_file(&cli.snapshot) {
                Ok(()) => format!("Saved to {}", cli.snapshot),
                Err(e) => format!("Save failed: {e}"),
            });
        }

        let mut sink = graphics::MacroquadSink::new(ecosystem.canvas, ui_state.stats_panel_width);

        if ui_state.paused || ecosystem.is_extinct() {
            // redraw the frozen state without advancing it
            sink.clear();
            ecosystem.predators.organisms.iter().for_each(|p| p.draw(&mut sink));
            ecosystem.prey.organisms.iter().for_each(|p| p.draw(&mut sink));
        } else {
            for step in 0..ui_state.steps_per_frame {
                let last = step + 1 == ui_state.steps_per_frame;
                let outcome = if last && ui_state.rendering_enabled {
                    ecosystem.step(&mut sink)
                } else {
                    ecosystem.step(&mut NullSink)
                };
                if let StepOutcome::NewGeneration(summary) = outcome {
                    ui_state.status_message = Some(format!(
                        "Generation {}: {} predators from {} survivors",
                        summary.generation, summary.offspring, summary.survivors
                    ));
                }
            }
            if !ui_state.rendering_enabled {
                clear_background(LIGHTGRAY);
            }
        }

        ui::draw_ui(&mut ui_state, &ecosystem);
        ui::process_egui();

        next_frame().await;
    }
}
