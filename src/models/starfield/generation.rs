use rand::rngs::StdRng;
use rand::Rng;

use crate::models::vector::Vector;

/// Scatter `count` points uniformly over [0,width) x [0,height).
pub fn scatter_stars(rng: &mut StdRng, width: f64, height: f64, count: usize) -> Vec<Vector> {
    (0..count)
        .map(|_| Vector::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)))
        .collect()
}
