use std::f64::consts::PI;

use super::constants::{SHIP_FILL_COLOR, SHIP_LINE_WIDTH, SHIP_STROKE_COLOR};
use super::vector::Vector;
use crate::render::context::DrawingContext;
use crate::render::surface::Surface;

/// The player's ship: a triangle pinned to the middle of the surface that
/// turns to face the pointer.
#[derive(Debug, Clone)]
pub struct Ship {
    center: Vector,
    size: f64,
    angle: f64,
    /// Outline at angle zero in surface coordinates. Kept for reference;
    /// rendering computes its own vertices.
    vertices: [Vector; 3],
}

impl Ship {
    /// Create a ship of `size` centered on a `width` x `height` surface.
    /// The center is fixed for the life of the ship.
    pub fn new(size: f64, width: f64, height: f64) -> Self {
        let center = Vector::new(width / 2.0, height / 2.0);
        let half = size / 2.0;
        Ship {
            center,
            size,
            angle: 0.0,
            vertices: [
                Vector::new(center.x, center.y + half),
                Vector::new(center.x + half, center.y - half),
                Vector::new(center.x - half, center.y - half),
            ],
        }
    }

    pub fn center(&self) -> Vector {
        self.center
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn vertices(&self) -> &[Vector; 3] {
        &self.vertices
    }

    /// Set the heading in radians. Any value is accepted as-is.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    /// Draw the ship rotated about its center.
    ///
    /// The context transform is moved into ship space and then walked back,
    /// leaving it as it was on entry.
    pub fn render<S: Surface>(&self, ctx: &mut DrawingContext<S>) {
        ctx.translate(self.center);
        ctx.rotate(self.angle);

        ctx.begin_path();
        ctx.move_to(Vector::new(self.size, 0.0));
        for i in 1..=3 {
            ctx.line_to(Vector::from_angle(i as f64 * 2.0 * PI / 3.0) * self.size);
        }
        ctx.close_path();
        ctx.set_fill_style(SHIP_FILL_COLOR);
        ctx.set_stroke_style(SHIP_STROKE_COLOR);
        ctx.set_line_width(SHIP_LINE_WIDTH);
        ctx.stroke();
        ctx.fill();

        ctx.rotate(-self.angle);
        ctx.translate(-self.center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{DrawCommand, RecordingSurface};
    use std::f64::consts::FRAC_PI_2;

    fn close(a: Vector, b: Vector) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn new_ship_is_centered_and_level() {
        let ship = Ship::new(30.0, 800.0, 600.0);
        assert_eq!(ship.center(), Vector::new(400.0, 300.0));
        assert_eq!(ship.angle(), 0.0);
        assert_eq!(ship.size(), 30.0);
        assert_eq!(ship.vertices()[0], Vector::new(400.0, 315.0));
    }

    #[test]
    fn set_angle_accepts_any_value() {
        let mut ship = Ship::new(10.0, 100.0, 100.0);
        ship.set_angle(-7.5);
        assert_eq!(ship.angle(), -7.5);
        ship.set_angle(0.0);
        assert_eq!(ship.angle(), 0.0);
    }

    #[test]
    fn render_strokes_then_fills_triangle() {
        let ship = Ship::new(30.0, 800.0, 600.0);
        let mut ctx = DrawingContext::new(RecordingSurface::new());
        ship.render(&mut ctx);

        let commands = &ctx.surface().commands;
        assert_eq!(commands.len(), 2);
        match &commands[0] {
            DrawCommand::StrokePolygon {
                points,
                width,
                paint,
                ..
            } => {
                assert_eq!(*width, SHIP_LINE_WIDTH);
                assert_eq!(paint.color, SHIP_STROKE_COLOR);
                assert!(close(points[0], Vector::new(430.0, 300.0)));
            }
            other => panic!("expected stroke, got {:?}", other),
        }
        match &commands[1] {
            DrawCommand::FillPolygon { paint, .. } => assert_eq!(paint.color, SHIP_FILL_COLOR),
            other => panic!("expected fill, got {:?}", other),
        }
    }

    #[test]
    fn render_rotates_about_center() {
        let mut ship = Ship::new(30.0, 800.0, 600.0);
        ship.set_angle(FRAC_PI_2);
        let mut ctx = DrawingContext::new(RecordingSurface::new());
        ship.render(&mut ctx);

        match &ctx.surface().commands[1] {
            DrawCommand::FillPolygon { points, .. } => {
                // nose points straight down
                assert!(close(points[0], Vector::new(400.0, 330.0)));
            }
            other => panic!("expected fill, got {:?}", other),
        }
    }

    #[test]
    fn render_restores_transform() {
        let mut ship = Ship::new(30.0, 1920.0, 1080.0);
        ship.set_angle(2.4);
        let mut ctx = DrawingContext::new(RecordingSurface::new());
        ship.render(&mut ctx);
        assert!(ctx.transform().is_identity(1e-9));
    }
}
