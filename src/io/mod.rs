//! Input abstractions
//!
//! Provides a trait for pointer input so the frame loop can be driven by
//! scripted input in tests.

use macroquad::input;

use crate::models::vector::Vector;

/// Source of pointer-move events
pub trait PointerInput {
    /// Pointer position in surface coordinates, if it moved since the last
    /// poll.
    fn poll_move(&mut self) -> Option<Vector>;
}

/// Mouse input read from the macroquad window
#[derive(Debug, Default)]
pub struct WindowPointer {
    last: Option<(f32, f32)>,
}

impl WindowPointer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PointerInput for WindowPointer {
    fn poll_move(&mut self) -> Option<Vector> {
        let pos = input::mouse_position();
        let previous = self.last.replace(pos);
        // the first reading only establishes where the pointer starts
        match previous {
            Some(last) if last != pos => Some(Vector::new(pos.0 as f64, pos.1 as f64)),
            _ => None,
        }
    }
}
