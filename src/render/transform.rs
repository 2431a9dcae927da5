use crate::models::vector::Vector;

/// 2D affine transform in canvas order:
/// `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Post-multiply by a translation, as a canvas `translate` does.
    pub fn translate(&mut self, by: Vector) {
        self.e += self.a * by.x + self.c * by.y;
        self.f += self.b * by.x + self.d * by.y;
    }

    /// Post-multiply by a clockwise (on screen) rotation of `angle` radians.
    pub fn rotate(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        let Transform { a, b, c, d, .. } = *self;
        self.a = a * cos + c * sin;
        self.b = b * cos + d * sin;
        self.c = c * cos - a * sin;
        self.d = d * cos - b * sin;
    }

    pub fn apply(&self, p: Vector) -> Vector {
        Vector::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// True when the linear part is the identity, so shapes only move.
    pub fn is_translation(&self, tolerance: f64) -> bool {
        (self.a - 1.0).abs() <= tolerance
            && self.b.abs() <= tolerance
            && self.c.abs() <= tolerance
            && (self.d - 1.0).abs() <= tolerance
    }

    pub fn is_identity(&self, tolerance: f64) -> bool {
        self.is_translation(tolerance) && self.e.abs() <= tolerance && self.f.abs() <= tolerance
    }
}
