//! Starfield model
//!
//! Layers of star clusters drifting across the drawing surface. The
//! starfield owns its random source so a seed reproduces the same sky.

mod generation;
pub mod motion;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::cluster::Cluster;
use super::config::{ClusterConfig, MotionPolicy};
use super::constants::{BACKGROUND_COLOR, GLOW_BLUR, GLOW_COLOR, STAR_COLOR};
use super::errors::{SceneError, SceneResult};
use super::vector::Vector;
use crate::render::context::DrawingContext;
use crate::render::surface::{Shadow, Surface};

use generation::scatter_stars;
use motion::{drift_signs, wrap_modulo, wrap_reset};

pub struct Starfield {
    width: f64,
    height: f64,
    motion: MotionPolicy,
    clusters: Vec<Cluster>,
    rng: StdRng,
}

impl Starfield {
    /// Create an empty starfield covering a `width` x `height` surface.
    ///
    /// Fails when either dimension is below one pixel or not finite, which
    /// means there is no surface to draw on.
    pub fn new(width: f64, height: f64, motion: MotionPolicy, seed: u64) -> SceneResult<Self> {
        if !(width.is_finite() && height.is_finite() && width >= 1.0 && height >= 1.0) {
            return Err(SceneError::SurfaceUnavailable { width, height });
        }
        Ok(Starfield {
            width,
            height,
            motion,
            clusters: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn motion(&self) -> MotionPolicy {
        self.motion
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Iterate every star of every cluster.
    pub fn stars(&self) -> impl Iterator<Item = &Vector> {
        self.clusters.iter().flat_map(|c| c.stars.iter())
    }

    /// Append a cluster of `config.count` randomly placed stars.
    pub fn generate_cluster(&mut self, config: ClusterConfig) {
        let stars = scatter_stars(&mut self.rng, self.width, self.height, config.count);
        debug!(
            "generated cluster {}: radius {}, {} stars, velocity ({}, {})",
            self.clusters.len(),
            config.radius,
            stars.len(),
            config.initial_velocity.x,
            config.initial_velocity.y
        );
        self.clusters
            .push(Cluster::new(config.radius, config.initial_velocity, stars));
    }

    /// Paint the whole surface with the background color.
    pub fn clear<S: Surface>(&self, ctx: &mut DrawingContext<S>) {
        ctx.set_fill_style(BACKGROUND_COLOR);
        ctx.fill_rect(Vector::ZERO, Vector::new(self.width, self.height));
    }

    /// Draw every star as a glowing dot.
    ///
    /// The glow is left set on the context, so anything drawn afterwards in
    /// the same frame glows too.
    pub fn render<S: Surface>(&self, ctx: &mut DrawingContext<S>) {
        ctx.set_shadow(Shadow {
            blur: GLOW_BLUR,
            color: GLOW_COLOR,
        });
        for cluster in &self.clusters {
            for &star in &cluster.stars {
                ctx.begin_path();
                ctx.circle(star, cluster.radius);
                ctx.set_fill_style(STAR_COLOR);
                ctx.fill();
            }
        }
    }

    /// Advance every star one frame and wrap it back onto the surface.
    pub fn update(&mut self) {
        let (width, height) = (self.width, self.height);
        for cluster in &mut self.clusters {
            match self.motion {
                MotionPolicy::Drift => {
                    let step = cluster.velocity;
                    for star in &mut cluster.stars {
                        star.x = wrap_modulo(star.x + step.x, width);
                        star.y = wrap_modulo(star.y + step.y, height);
                    }
                }
                MotionPolicy::Steer => {
                    let step = cluster.velocity * cluster.radius;
                    for star in &mut cluster.stars {
                        star.x = wrap_reset(star.x + step.x, width);
                        star.y = wrap_reset(star.y + step.y, height);
                    }
                }
            }
        }
    }

    /// Overwrite every cluster's velocity with `(vx, vy)`.
    pub fn update_velocity(&mut self, vx: f64, vy: f64) {
        for cluster in &mut self.clusters {
            cluster.velocity = Vector::new(vx, vy);
        }
    }

    /// Point every cluster against `angle`, keeping each cluster's speed.
    pub fn update_direction(&mut self, angle: f64) {
        let (dx, dy) = drift_signs(angle);
        for cluster in &mut self.clusters {
            cluster.velocity = Vector::new(dx * cluster.speed.x.abs(), dy * cluster.speed.y.abs());
        }
    }

    /// React to the ship turning towards `angle`, per the motion policy.
    pub fn steer(&mut self, angle: f64) {
        match self.motion {
            MotionPolicy::Drift => self.update_direction(angle),
            MotionPolicy::Steer => {
                let v = -Vector::from_angle(angle);
                self.update_velocity(v.x, v.y);
            }
        }
    }
}
