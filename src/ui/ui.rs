use egui_macroquad::egui;
use predprey::simulation::ecosystem::Ecosystem;

#[allow(clippy::struct_excessive_bools)]
pub struct UIState {
    pub stats_panel_width: f32,
    pub steps_per_frame: u32,
    pub paused: bool,
    pub rendering_enabled: bool,
    pub reset_requested: bool,
    pub save_requested: bool,
    pub status_message: Option<String>,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            stats_panel_width: 300.0,
            steps_per_frame: 1,
            paused: false,
            rendering_enabled: true,
            reset_requested: false,
            save_requested: false,
            status_message: None,
        }
    }
}

pub fn draw_ui(state: &mut UIState, ecosystem: &Ecosystem) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        egui_ctx.set_visuals(visuals);

        super::stats::draw_stats_panel(egui_ctx, state, ecosystem);
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
