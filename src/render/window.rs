//! Window backend drawing through macroquad's immediate-mode shapes.
//!
//! Macroquad has no blur, so glow is faked with a few translucent halo
//! layers drawn under each shape. The halo reaches half the blur radius.

use macroquad::math::{vec2, Vec2};
use macroquad::shapes;

use super::surface::{Paint, Shadow, Surface};
use crate::models::vector::Vector;

const GLOW_LAYERS: u32 = 4;
const GLOW_ALPHA: f32 = 0.08;

#[derive(Debug, Default)]
pub struct WindowSurface;

impl WindowSurface {
    pub fn new() -> Self {
        WindowSurface
    }
}

fn point(v: Vector) -> Vec2 {
    vec2(v.x as f32, v.y as f32)
}

/// Halo layers as (extra size, color), outermost first.
fn halo(glow: Shadow) -> impl Iterator<Item = (f32, macroquad::color::Color)> {
    (1..=GLOW_LAYERS).rev().map(move |i| {
        let spread = glow.blur as f32 * 0.5 * i as f32 / GLOW_LAYERS as f32;
        (spread, macroquad::color::Color::from(glow.color.with_alpha(GLOW_ALPHA)))
    })
}

impl Surface for WindowSurface {
    fn fill_rect(&mut self, origin: Vector, size: Vector, paint: Paint) {
        shapes::draw_rectangle(
            origin.x as f32,
            origin.y as f32,
            size.x as f32,
            size.y as f32,
            paint.color.into(),
        );
    }

    fn fill_circle(&mut self, center: Vector, radius: f64, paint: Paint) {
        let (x, y, r) = (center.x as f32, center.y as f32, radius as f32);
        if let Some(glow) = paint.glow {
            for (spread, color) in halo(glow) {
                shapes::draw_circle(x, y, r + spread, color);
            }
        }
        shapes::draw_circle(x, y, r, paint.color.into());
    }

    fn fill_polygon(&mut self, points: &[Vector], paint: Paint) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        if let Some(glow) = paint.glow {
            for (spread, color) in halo(glow) {
                outline(points, spread * 2.0, true, color);
            }
        }
        // fan triangulation; polygons here are convex
        let color = paint.color.into();
        for pair in rest.windows(2) {
            shapes::draw_triangle(point(first), point(pair[0]), point(pair[1]), color);
        }
    }

    fn stroke_polygon(&mut self, points: &[Vector], width: f64, closed: bool, paint: Paint) {
        if let Some(glow) = paint.glow {
            for (spread, color) in halo(glow) {
                outline(points, width as f32 + spread * 2.0, closed, color);
            }
        }
        outline(points, width as f32, closed, paint.color.into());
    }
}

fn outline(points: &[Vector], thickness: f32, closed: bool, color: macroquad::color::Color) {
    let segment = |a: Vector, b: Vector| {
        shapes::draw_line(
            a.x as f32,
            a.y as f32,
            b.x as f32,
            b.y as f32,
            thickness,
            color,
        )
    };
    for pair in points.windows(2) {
        segment(pair[0], pair[1]);
    }
    if closed && points.len() > 2 {
        if let (Some(&last), Some(&first)) = (points.last(), points.first()) {
            segment(last, first);
        }
    }
}
