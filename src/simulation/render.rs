//! Rendering collaborator interface.
//!
//! The simulation never draws directly. Hosts implement [`RenderSink`] and
//! receive one set of calls per organism per tick. Failures inside a sink are
//! not the simulation's concern.

use super::color::Rgb;
use super::vector::Vector2D;

/// Drawing primitives supplied by the host.
pub trait RenderSink {
    /// Clears the whole viewport.
    fn clear(&mut self);

    /// Draws a filled circle.
    fn fill_circle(&mut self, center: Vector2D, radius: f32, color: Rgb);

    /// Draws a circle outline.
    fn stroke_circle(&mut self, center: Vector2D, radius: f32, color: Rgb);

    /// Draws a straight line.
    fn line(&mut self, from: Vector2D, to: Vector2D, color: Rgb);
}

/// Anything that knows how to render itself onto a [`RenderSink`].
pub trait Drawable {
    /// Issues the draw calls for this entity.
    fn draw(&self, sink: &mut dyn RenderSink);
}

/// Sink that discards every call. Used for headless runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn clear(&mut self) {}

    fn fill_circle(&mut self, _center: Vector2D, _radius: f32, _color: Rgb) {}

    fn stroke_circle(&mut self, _center: Vector2D, _radius: f32, _color: Rgb) {}

    fn line(&mut self, _from: Vector2D, _to: Vector2D, _color: Rgb) {}
}
