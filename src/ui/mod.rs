// UI module - egui overlay for the windowed host

mod stats;
mod ui;

pub use ui::{UIState, draw_ui, process_egui};
