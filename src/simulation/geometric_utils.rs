//! Canvas edges, point-to-line distances and boundary clamping.

use geo::{Line, Point};

use super::canvas::Canvas;
use super::vector::Vector2D;

/// One of the four canvas boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// `x = 0`.
    Left,
    /// `x = width`.
    Right,
    /// `y = 0`.
    Top,
    /// `y = height`.
    Bottom,
}

impl Edge {
    /// Edges in the order predators test them.
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// The boundary as a line segment in canvas coordinates.
    pub fn line(self, canvas: &Canvas) -> Line<f32> {
        let (w, h) = (canvas.width, canvas.height);
        let (start, end) = match self {
            Edge::Left => (Point::new(0.0, 0.0), Point::new(0.0, h)),
            Edge::Right => (Point::new(w, 0.0), Point::new(w, h)),
            Edge::Top => (Point::new(0.0, 0.0), Point::new(w, 0.0)),
            Edge::Bottom => (Point::new(0.0, h), Point::new(w, h)),
        };
        Line::new(start, end)
    }

    /// Unit vector pointing from the canvas interior towards this edge.
    pub fn outward(self) -> Vector2D {
        match self {
            Edge::Left => Vector2D::new(-1.0, 0.0),
            Edge::Right => Vector2D::new(1.0, 0.0),
            Edge::Top => Vector2D::new(0.0, -1.0),
            Edge::Bottom => Vector2D::new(0.0, 1.0),
        }
    }

    /// Distance from `point` to the (infinite) line carrying this edge.
    pub fn distance(self, point: Vector2D, canvas: &Canvas) -> f32 {
        point_line_distance(point, &self.line(canvas))
    }
}

/// Distance from a point to the infinite line through `line`.
///
/// Uses `|a·x + b·y + c| / sqrt(a² + b²)` with the line written as
/// `a·x + b·y + c = 0`.
pub fn point_line_distance(point: Vector2D, line: &Line<f32>) -> f32 {
    let a = line.dy();
    let b = -line.dx();
    let c = line.end.x * line.start.y - line.start.x * line.end.y;
    (a * point.x + b * point.y + c).abs() / a.hypot(b)
}

/// Clamps each axis of `position` to `[radius, dimension - radius]`.
pub fn clamp_to_canvas(position: Vector2D, radius: f32, canvas: &Canvas) -> Vector2D {
    Vector2D::new(
        clamp_axis(position.x, radius, canvas.width),
        clamp_axis(position.y, radius, canvas.height),
    )
}

fn clamp_axis(value: f32, radius: f32, dimension: f32) -> f32 {
    // max/min instead of f32::clamp, which panics if the canvas is narrower than the body
    value.max(radius).min(dimension - radius)
}
