//! Scene engine
//!
//! Owns the starfield and the ship, and runs the fixed per-frame sequence:
//! clear, draw stars, draw ship, advance stars.

use log::{debug, trace};

use crate::models::config::SceneConfig;
use crate::models::errors::SceneResult;
use crate::models::ship::Ship;
use crate::models::starfield::Starfield;
use crate::models::vector::Vector;
use crate::render::context::DrawingContext;
use crate::render::surface::Surface;
use crate::services::steering::heading;

/// One running scene on a fixed-size surface
pub struct SceneEngine {
    starfield: Starfield,
    ship: Ship,
    frames: u64,
}

impl SceneEngine {
    /// Builds a scene for a `width` x `height` surface
    ///
    /// # Arguments
    ///
    /// * `config` - Scene settings; validated before anything is generated
    /// * `width`, `height` - Surface size in pixels, read once at startup
    ///
    /// # Errors
    ///
    /// Returns the first configuration error, or `SurfaceUnavailable` when
    /// the surface has no area.
    pub fn new(config: &SceneConfig, width: f64, height: f64) -> SceneResult<Self> {
        config.validate()?;
        let mut starfield = Starfield::new(width, height, config.motion, config.seed)?;
        for cluster in &config.clusters {
            starfield.generate_cluster(*cluster);
        }
        debug!(
            "scene ready: {}x{}, {} clusters, motion {}",
            width,
            height,
            starfield.clusters().len(),
            config.motion.name()
        );
        Ok(Self {
            starfield,
            ship: Ship::new(config.ship_size, width, height),
            frames: 0,
        })
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn starfield_mut(&mut self) -> &mut Starfield {
        &mut self.starfield
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Number of frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Turns the ship towards `pointer` and steers the stars to match
    ///
    /// # Returns
    ///
    /// The new heading in radians
    pub fn pointer_moved(&mut self, pointer: Vector) -> f64 {
        let angle = heading(self.ship.center(), pointer);
        trace!("pointer ({}, {}) -> heading {:.3}", pointer.x, pointer.y, angle);
        self.ship.set_angle(angle);
        self.starfield.steer(angle);
        angle
    }

    /// Draws the current frame, then advances the stars
    pub fn frame<S: Surface>(&mut self, ctx: &mut DrawingContext<S>) {
        self.starfield.clear(ctx);
        self.starfield.render(ctx);
        self.ship.render(ctx);
        self.starfield.update();
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::SceneError;
    use crate::render::recording::{DrawCommand, RecordingSurface};

    #[test]
    fn builds_default_scene() {
        let engine = SceneEngine::new(&SceneConfig::default(), 1024.0, 768.0).unwrap();
        assert_eq!(engine.starfield().clusters().len(), 3);
        assert_eq!(engine.starfield().stars().count(), 150);
        assert_eq!(engine.ship().center(), Vector::new(512.0, 384.0));
        assert_eq!(engine.frames(), 0);
    }

    #[test]
    fn rejects_invalid_config_before_generating() {
        let config = SceneConfig {
            ship_size: 0.0,
            ..SceneConfig::default()
        };
        assert!(matches!(
            SceneEngine::new(&config, 800.0, 600.0),
            Err(SceneError::InvalidShip(_))
        ));
    }

    #[test]
    fn frame_draws_in_order() {
        let mut engine = SceneEngine::new(&SceneConfig::default(), 800.0, 600.0).unwrap();
        let mut ctx = DrawingContext::new(RecordingSurface::new());
        engine.frame(&mut ctx);

        let commands = &ctx.surface().commands;
        // background, 150 stars, ship stroke, ship fill
        assert_eq!(commands.len(), 153);
        assert!(matches!(commands[0], DrawCommand::FillRect { .. }));
        assert!(commands[1..151]
            .iter()
            .all(|c| matches!(c, DrawCommand::FillCircle { .. })));
        assert!(matches!(commands[151], DrawCommand::StrokePolygon { .. }));
        assert!(matches!(commands[152], DrawCommand::FillPolygon { .. }));
        assert_eq!(engine.frames(), 1);
    }

    #[test]
    fn stars_move_after_drawing() {
        let mut engine = SceneEngine::new(&SceneConfig::default(), 800.0, 600.0).unwrap();
        let before: Vec<Vector> = engine.starfield().stars().copied().collect();
        let mut ctx = DrawingContext::new(RecordingSurface::new());
        engine.frame(&mut ctx);

        let drawn: Vec<Vector> = ctx.surface().circles().iter().map(|c| c.0).collect();
        assert_eq!(drawn, before);
        let after: Vec<Vector> = engine.starfield().stars().copied().collect();
        assert_ne!(after, before);
    }

    #[test]
    fn pointer_right_of_ship_levels_it() {
        let mut engine = SceneEngine::new(&SceneConfig::default(), 800.0, 600.0).unwrap();
        let center = engine.ship().center();
        let angle = engine.pointer_moved(center + Vector::new(100.0, 0.0));
        assert_eq!(angle, 0.0);
        assert_eq!(engine.ship().angle(), 0.0);
    }
}
