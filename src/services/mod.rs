//! Scene services
//!
//! Pointer steering math and the window animation loop.

pub mod animation;
pub mod steering;
