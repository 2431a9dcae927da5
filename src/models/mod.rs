//! Domain models
//!
//! This module contains the scene entities and their configuration.
//! Models draw themselves through an explicit drawing context and hold no
//! window or input state.

pub mod constants;
pub mod vector;
pub mod cluster;
pub mod config;
pub mod starfield;
pub mod ship;
pub mod errors;
