//! Stardrift
//!
//! A small animated scene: layers of star clusters drifting across the
//! window and a triangular ship in the middle that turns to face the
//! pointer.
//!
//! # Modules
//!
//! - [`engine`] - Scene engine running the per-frame sequence
//! - [`models`] - Starfield, ship, configuration and errors
//! - [`render`] - Drawing context and surface backends
//! - [`services`] - Pointer steering and the window animation loop
//! - [`io`] - Pointer input abstractions for testing
//! - [`cli`] - Command-line arguments
//!
//! # Example
//!
//! ```rust
//! use stardrift::render::context::DrawingContext;
//! use stardrift::render::recording::RecordingSurface;
//! use stardrift::{SceneConfig, SceneEngine};
//!
//! let mut engine = SceneEngine::new(&SceneConfig::default(), 800.0, 600.0).unwrap();
//! let mut ctx = DrawingContext::new(RecordingSurface::new());
//! engine.frame(&mut ctx);
//! assert_eq!(engine.frames(), 1);
//! ```

pub mod engine;
pub mod models;
pub mod render;
pub mod services;
pub mod io;
pub mod cli;

// Re-export commonly used types
pub use engine::SceneEngine;
pub use models::config::{ClusterConfig, MotionPolicy, SceneConfig};
pub use models::errors::{SceneError, SceneResult};
