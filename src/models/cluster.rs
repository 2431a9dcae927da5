use super::vector::Vector;

/// A group of stars sharing one radius and one velocity.
#[derive(Debug, Clone)]
pub struct Cluster {
    pub radius: f64,
    /// Configured initial velocity. Direction updates take their magnitudes
    /// from here, so repeating an update never compounds.
    pub speed: Vector,
    pub velocity: Vector,
    pub stars: Vec<Vector>,
}

impl Cluster {
    pub fn new(radius: f64, velocity: Vector, stars: Vec<Vector>) -> Self {
        Cluster {
            radius,
            speed: velocity,
            velocity,
            stars,
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
