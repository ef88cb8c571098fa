use macroquad::prelude::*;
use predprey::simulation::canvas::Canvas;
use predprey::simulation::color::Rgb;
use predprey::simulation::render::RenderSink;
use predprey::simulation::vector::Vector2D;

const BACKGROUND: Color = Color::new(0.96, 0.96, 0.94, 1.0);
const CANVAS_FILL: Color = WHITE;

/// Draws simulation calls into the macroquad window, scaling canvas units to
/// the part of the screen not covered by the stats panel.
pub struct MacroquadSink {
    scale: f32,
    canvas: Canvas,
}

impl MacroquadSink {
    pub fn new(canvas: Canvas, panel_width: f32) -> Self {
        let available_w = (screen_width() - panel_width).max(1.0);
        let scale = (available_w / canvas.width).min(screen_height() / canvas.height);
        Self { scale, canvas }
    }

    fn to_screen(&self, v: Vector2D) -> (f32, f32) {
        (v.x * self.scale, v.y * self.scale)
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}

impl RenderSink for MacroquadSink {
    fn clear(&mut self) {
        clear_background(BACKGROUND);
        draw_rectangle(
            0.0,
            0.0,
            self.canvas.width * self.scale,
            self.canvas.height * self.scale,
            CANVAS_FILL,
        );
    }

    fn fill_circle(&mut self, center: Vector2D, radius: f32, color: Rgb) {
        let (x, y) = self.to_screen(center);
        draw_circle(x, y, radius * self.scale, to_color(color));
    }

    fn stroke_circle(&mut self, center: Vector2D, radius: f32, color: Rgb) {
        let (x, y) = self.to_screen(center);
        let mut color = to_color(color);
        color.a = 0.35;
        draw_circle_lines(x, y, radius * self.scale, 1.0, color);
    }

    fn line(&mut self, from: Vector2D, to: Vector2D, color: Rgb) {
        let (x1, y1) = self.to_screen(from);
        let (x2, y2) = self.to_screen(to);
        draw_line(x1, y1, x2, y2, 1.5, to_color(color));
    }
}
