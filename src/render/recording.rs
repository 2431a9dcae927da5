//! In-memory surface that records draw calls instead of rasterizing them.

use super::surface::{Paint, Surface};
use crate::models::vector::Vector;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        origin: Vector,
        size: Vector,
        paint: Paint,
    },
    FillCircle {
        center: Vector,
        radius: f64,
        paint: Paint,
    },
    FillPolygon {
        points: Vec<Vector>,
        paint: Paint,
    },
    StrokePolygon {
        points: Vec<Vector>,
        width: f64,
        closed: bool,
        paint: Paint,
    },
}

impl DrawCommand {
    pub fn paint(&self) -> Paint {
        match self {
            DrawCommand::FillRect { paint, .. }
            | DrawCommand::FillCircle { paint, .. }
            | DrawCommand::FillPolygon { paint, .. }
            | DrawCommand::StrokePolygon { paint, .. } => *paint,
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded circle as (center, radius, paint).
    pub fn circles(&self) -> Vec<(Vector, f64, Paint)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillCircle {
                    center,
                    radius,
                    paint,
                } => Some((*center, *radius, *paint)),
                _ => None,
            })
            .collect()
    }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, origin: Vector, size: Vector, paint: Paint) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            size,
            paint,
        });
    }

    fn fill_circle(&mut self, center: Vector, radius: f64, paint: Paint) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            paint,
        });
    }

    fn fill_polygon(&mut self, points: &[Vector], paint: Paint) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            paint,
        });
    }

    fn stroke_polygon(&mut self, points: &[Vector], width: f64, closed: bool, paint: Paint) {
        self.commands.push(DrawCommand::StrokePolygon {
            points: points.to_vec(),
            width,
            closed,
            paint,
        });
    }
}
