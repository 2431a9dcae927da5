//! Rendering
//!
//! The drawing context and the surfaces it can draw into.
//!
//! - [`context`] - Canvas-style state machine (styles, glow, transform, paths)
//! - [`surface`] - Backend trait and paint types
//! - [`window`] - macroquad backend used by the binary
//! - [`recording`] - Backend that records draw calls, for tests and tooling

pub mod color;
pub mod context;
pub mod recording;
pub mod surface;
pub mod transform;
pub mod window;
