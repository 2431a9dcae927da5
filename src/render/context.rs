//! Stateful 2D drawing context
//!
//! Mirrors the familiar canvas model: styles, glow and the current transform
//! persist between calls until changed, and paths are built point by point
//! before being filled or stroked. The context owns its surface and is
//! passed explicitly to everything that draws.

use super::color::Color;
use super::surface::{Paint, Shadow, Surface};
use super::transform::Transform;
use crate::models::vector::Vector;

/// Tolerance for treating the transform as rotation free.
const AXIS_ALIGNED_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, PartialEq)]
enum SubPath {
    Circle { center: Vector, radius: f64 },
    Polyline { points: Vec<Vector>, closed: bool },
}

pub struct DrawingContext<S: Surface> {
    surface: S,
    fill_style: Color,
    stroke_style: Color,
    line_width: f64,
    shadow: Option<Shadow>,
    transform: Transform,
    /// Current path, already in surface coordinates.
    path: Vec<SubPath>,
}

impl<S: Surface> DrawingContext<S> {
    pub fn new(surface: S) -> Self {
        DrawingContext {
            surface,
            fill_style: Color::WHITE,
            stroke_style: Color::WHITE,
            line_width: 1.0,
            shadow: None,
            transform: Transform::IDENTITY,
            path: Vec::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn shadow(&self) -> Option<Shadow> {
        self.shadow
    }

    // ========== Style ==========

    pub fn set_fill_style(&mut self, color: Color) {
        self.fill_style = color;
    }

    pub fn set_stroke_style(&mut self, color: Color) {
        self.stroke_style = color;
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    /// Set the glow applied to everything drawn from now on.
    pub fn set_shadow(&mut self, shadow: Shadow) {
        self.shadow = Some(shadow);
    }

    pub fn clear_shadow(&mut self) {
        self.shadow = None;
    }

    // ========== Transform ==========

    pub fn translate(&mut self, by: Vector) {
        self.transform.translate(by);
    }

    pub fn rotate(&mut self, angle: f64) {
        self.transform.rotate(angle);
    }

    pub fn reset_transform(&mut self) {
        self.transform = Transform::IDENTITY;
    }

    // ========== Paths ==========

    pub fn begin_path(&mut self) {
        self.path.clear();
    }

    /// Add a full circle to the path.
    pub fn circle(&mut self, center: Vector, radius: f64) {
        self.path.push(SubPath::Circle {
            center: self.transform.apply(center),
            radius,
        });
    }

    /// Start a new subpath at `point`.
    pub fn move_to(&mut self, point: Vector) {
        self.path.push(SubPath::Polyline {
            points: vec![self.transform.apply(point)],
            closed: false,
        });
    }

    /// Extend the current subpath, starting one if there is none.
    pub fn line_to(&mut self, point: Vector) {
        let point = self.transform.apply(point);
        match self.path.last_mut() {
            Some(SubPath::Polyline { points, closed: false }) => points.push(point),
            _ => self.path.push(SubPath::Polyline {
                points: vec![point],
                closed: false,
            }),
        }
    }

    pub fn close_path(&mut self) {
        if let Some(SubPath::Polyline { closed, .. }) = self.path.last_mut() {
            *closed = true;
        }
    }

    // ========== Drawing ==========

    /// Fill a rectangle given in user space.
    pub fn fill_rect(&mut self, origin: Vector, size: Vector) {
        let paint = self.fill_paint();
        if self.transform.is_translation(AXIS_ALIGNED_EPSILON) {
            self.surface
                .fill_rect(self.transform.apply(origin), size, paint);
        } else {
            let corners = [
                origin,
                Vector::new(origin.x + size.x, origin.y),
                origin + size,
                Vector::new(origin.x, origin.y + size.y),
            ]
            .map(|p| self.transform.apply(p));
            self.surface.fill_polygon(&corners, paint);
        }
    }

    /// Fill every subpath of the current path with the fill style.
    pub fn fill(&mut self) {
        let paint = self.fill_paint();
        for sub in &self.path {
            match sub {
                SubPath::Circle { center, radius } => {
                    self.surface.fill_circle(*center, *radius, paint)
                }
                SubPath::Polyline { points, .. } if points.len() >= 3 => {
                    self.surface.fill_polygon(points, paint)
                }
                SubPath::Polyline { .. } => {}
            }
        }
    }

    /// Stroke every polyline of the current path with the stroke style.
    pub fn stroke(&mut self) {
        let paint = Paint {
            color: self.stroke_style,
            glow: self.shadow,
        };
        for sub in &self.path {
            if let SubPath::Polyline { points, closed } = sub {
                if points.len() >= 2 {
                    self.surface
                        .stroke_polygon(points, self.line_width, *closed, paint);
                }
            }
        }
    }

    fn fill_paint(&self) -> Paint {
        Paint {
            color: self.fill_style,
            glow: self.shadow,
        }
    }
}
