//! Drawing surface abstraction
//!
//! A surface receives fully resolved primitives in surface coordinates.
//! Styles and transforms are tracked by [`DrawingContext`] and never reach a
//! backend, so backends stay small and can be swapped for tests.
//!
//! [`DrawingContext`]: super::context::DrawingContext

use super::color::Color;
use crate::models::vector::Vector;

/// Soft glow drawn behind a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub blur: f64,
    pub color: Color,
}

/// How a primitive is colored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub glow: Option<Shadow>,
}

/// Backend that rasterizes primitives.
pub trait Surface {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, origin: Vector, size: Vector, paint: Paint);

    fn fill_circle(&mut self, center: Vector, radius: f64, paint: Paint);

    /// Fill a convex polygon.
    fn fill_polygon(&mut self, points: &[Vector], paint: Paint);

    /// Stroke a polyline, joining the last point to the first when `closed`.
    fn stroke_polygon(&mut self, points: &[Vector], width: f64, closed: bool, paint: Paint);
}
