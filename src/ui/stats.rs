use egui_macroquad::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use predprey::simulation::ecosystem::Ecosystem;

use super::ui::UIState;

pub(super) fn draw_stats_panel(egui_ctx: &egui::Context, state: &mut UIState, ecosystem: &Ecosystem) {
    egui::SidePanel::right("stats_panel")
        .exact_width(state.stats_panel_width)
        .resizable(false)
        .show(egui_ctx, |ui| {
            ui.heading("Predators & Prey");
            ui.separator();

            ui.horizontal(|ui| {
                let pause_text = if state.paused { "▶ Resume" } else { "⏸ Pause" };
                if ui.button(pause_text).clicked() {
                    state.paused = !state.paused;
                }
                if ui.button("🔄 Reset").clicked() {
                    state.reset_requested = true;
                }
                if ui.button("💾 Save").clicked() {
                    state.save_requested = true;
                }
            });
            ui.checkbox(&mut state.rendering_enabled, "Rendering");

            if let Some(ref msg) = state.status_message {
                ui.label(msg);
            }

            ui.separator();
            ui.label("Steps per frame");
            ui.add(egui::Slider::new(&mut state.steps_per_frame, 1..=50));

            ui.separator();
            ui.label(format!("Generation: {}", ecosystem.generation()));
            ui.label(format!(
                "Predators: {} ({} alive)",
                ecosystem.predators.len(),
                ecosystem.predators.alive_count()
            ));
            ui.label(format!(
                "Prey: {} ({} alive)",
                ecosystem.prey.len(),
                ecosystem.prey.alive_count()
            ));
            ui.label(format!("Tick: {}", ecosystem.generation_ticks));
            if ecosystem.is_extinct() {
                ui.colored_label(egui::Color32::from_rgb(255, 120, 120), "Predators extinct");
            }

            ui.separator();
            ui.label("Population per generation");
            draw_population_plot(ui, ecosystem);

            ui.label("Mean traits per generation");
            draw_traits_plot(ui, ecosystem);
        });
}

fn draw_population_plot(ui: &mut egui::Ui, ecosystem: &Ecosystem) {
    if ecosystem.history.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    let predators = ecosystem.history.series(|s| Some(s.offspring as f64));
    let survivors = ecosystem.history.series(|s| Some(s.survivors as f64));

    Plot::new("population_plot")
        .height(150.0)
        .show_axes([true, true])
        .legend(Legend::default())
        .label_formatter(|name, value| {
            format!("{}\nGeneration: {:.0}\nCount: {:.0}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            let points: PlotPoints = predators.iter().map(|&(x, y)| [x, y]).collect();
            plot_ui.line(
                Line::new(points)
                    .color(egui::Color32::from_rgb(100, 150, 255))
                    .name("Predators"),
            );
            let points: PlotPoints = survivors.iter().map(|&(x, y)| [x, y]).collect();
            plot_ui.line(
                Line::new(points)
                    .color(egui::Color32::from_rgb(100, 200, 100))
                    .name("Survivors"),
            );
        });
}

fn draw_traits_plot(ui: &mut egui::Ui, ecosystem: &Ecosystem) {
    let speed = ecosystem.history.series(|s| s.mean_speed.map(f64::from));
    let sense = ecosystem.history.series(|s| {
        s.mean_sense_distance
            .map(|d| f64::from(d) / f64::from(ecosystem.params.sense_distance))
    });
    if speed.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("traits_plot")
        .height(150.0)
        .show_axes([true, true])
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            let points: PlotPoints = speed.iter().map(|&(x, y)| [x, y]).collect();
            plot_ui.line(
                Line::new(points)
                    .color(egui::Color32::from_rgb(255, 100, 100))
                    .name("Speed"),
            );
            let points: PlotPoints = sense.iter().map(|&(x, y)| [x, y]).collect();
            plot_ui.line(
                Line::new(points)
                    .color(egui::Color32::from_rgb(100, 150, 255))
                    .name("Sense (relative)"),
            );
        });
}
