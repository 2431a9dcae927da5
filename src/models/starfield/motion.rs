//! Per-axis movement rules for the two motion policies.

use std::f64::consts::FRAC_PI_2;

/// Move `value` into [0, extent) with a Euclidean modulo.
pub fn wrap_modulo(value: f64, extent: f64) -> f64 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid of a tiny negative value rounds up to `extent`
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

/// Reset a coordinate that left [0, extent) to the opposite edge.
pub fn wrap_reset(value: f64, extent: f64) -> f64 {
    if value < 0.0 {
        (extent - 1.0).max(0.0)
    } else if value >= extent {
        0.0
    } else {
        value
    }
}

/// Axis signs for a drifting starfield heading along `angle`.
///
/// Stars stream against the heading: a ship facing right (|angle| < pi/2)
/// sends them left, a ship facing down (angle >= 0) sends them up.
pub fn drift_signs(angle: f64) -> (f64, f64) {
    let dx = if angle.abs() >= FRAC_PI_2 { 1.0 } else { -1.0 };
    let dy = if angle >= 0.0 { -1.0 } else { 1.0 };
    (dx, dy)
}
