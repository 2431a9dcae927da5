//! Scene configuration
//!
//! Every tunable of a scene lives here with an explicit default, so call
//! sites never rely on implicit parameter values.

use super::constants::{
    DEFAULT_CLUSTER_COUNT, DEFAULT_CLUSTER_VELOCITY, DEFAULT_SEED, DEFAULT_SHIP_SIZE,
    SCENE_CLUSTERS,
};
use super::errors::{SceneError, SceneResult};
use super::vector::Vector;

/// How stars move and how pointer headings steer them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MotionPolicy {
    /// Each cluster keeps its own speed; the heading only picks the sign per
    /// axis. Positions wrap with a Euclidean modulo.
    #[default]
    Drift,
    /// The heading overwrites every cluster velocity with the same unit
    /// vector, scaled by the cluster radius when stars move. Coordinates
    /// leaving the surface are reset to the opposite edge.
    Steer,
}

impl MotionPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            MotionPolicy::Drift => "drift",
            MotionPolicy::Steer => "steer",
        }
    }
}

/// Parameters for one generated cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterConfig {
    pub radius: f64,
    pub count: usize,
    pub initial_velocity: Vector,
}

impl ClusterConfig {
    /// A cluster of `radius` with the default count and velocity.
    pub fn new(radius: f64) -> Self {
        ClusterConfig {
            radius,
            count: DEFAULT_CLUSTER_COUNT,
            initial_velocity: DEFAULT_CLUSTER_VELOCITY.into(),
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.initial_velocity = velocity;
        self
    }

    pub fn validate(&self) -> SceneResult<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SceneError::InvalidCluster(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        if !self.initial_velocity.is_finite() {
            return Err(SceneError::InvalidCluster(format!(
                "velocity must be finite, got ({}, {})",
                self.initial_velocity.x, self.initial_velocity.y
            )));
        }
        Ok(())
    }
}

/// Everything needed to build a scene, apart from the surface size.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub seed: u64,
    pub ship_size: f64,
    pub motion: MotionPolicy,
    pub clusters: Vec<ClusterConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            seed: DEFAULT_SEED,
            ship_size: DEFAULT_SHIP_SIZE,
            motion: MotionPolicy::default(),
            clusters: SCENE_CLUSTERS
                .iter()
                .map(|&(radius, count, velocity)| {
                    ClusterConfig::new(radius)
                        .with_count(count)
                        .with_velocity(velocity.into())
                })
                .collect(),
        }
    }
}

impl SceneConfig {
    /// Check the ship and every cluster before anything is drawn.
    pub fn validate(&self) -> SceneResult<()> {
        if !(self.ship_size.is_finite() && self.ship_size > 0.0) {
            return Err(SceneError::InvalidShip(format!(
                "size must be positive, got {}",
                self.ship_size
            )));
        }
        self.clusters.iter().try_for_each(ClusterConfig::validate)
    }

    /// Total number of stars across all clusters.
    pub fn star_count(&self) -> usize {
        self.clusters.iter().map(|c| c.count).sum()
    }
}
