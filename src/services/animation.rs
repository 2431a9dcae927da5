//! Animation loop
//!
//! Drives a [`SceneEngine`] once per display frame. Each frame first handles
//! pointer movement, then draws and advances the scene, then yields to the
//! window until the next frame.

use log::{debug, info};
use macroquad::input::{is_key_pressed, KeyCode};
use macroquad::time::get_frame_time;
use macroquad::window::{next_frame, screen_height, screen_width};

use crate::engine::SceneEngine;
use crate::io::{PointerInput, WindowPointer};
use crate::models::config::SceneConfig;
use crate::models::constants::FRAME_LOG_INTERVAL;
use crate::models::errors::SceneResult;
use crate::render::context::DrawingContext;
use crate::render::surface::Surface;
use crate::render::window::WindowSurface;

/// Run one frame: apply any pointer move, then draw and advance.
pub fn tick<S: Surface, P: PointerInput>(
    engine: &mut SceneEngine,
    ctx: &mut DrawingContext<S>,
    input: &mut P,
) {
    if let Some(pointer) = input.poll_move() {
        engine.pointer_moved(pointer);
    }
    engine.frame(ctx);
}

/// Open the scene in the current macroquad window and animate it until the
/// window closes, Escape is pressed, or `frame_limit` frames have run.
pub async fn run(config: SceneConfig, frame_limit: Option<u64>) -> SceneResult<()> {
    let (width, height) = (screen_width() as f64, screen_height() as f64);
    let mut engine = SceneEngine::new(&config, width, height)?;
    let mut ctx = DrawingContext::new(WindowSurface::new());
    let mut pointer = WindowPointer::new();
    info!(
        "animating {} stars on a {}x{} surface",
        engine.starfield().stars().count(),
        width,
        height
    );

    let mut frame_time = 0.0f64;
    loop {
        if is_key_pressed(KeyCode::Escape) {
            info!("escape pressed");
            break;
        }
        if frame_limit.is_some_and(|limit| engine.frames() >= limit) {
            info!("frame limit reached");
            break;
        }

        tick(&mut engine, &mut ctx, &mut pointer);

        frame_time += get_frame_time() as f64;
        if engine.frames() % FRAME_LOG_INTERVAL == 0 {
            debug!(
                "frame {}: average {:.2} ms",
                engine.frames(),
                frame_time * 1e3 / FRAME_LOG_INTERVAL as f64
            );
            frame_time = 0.0;
        }

        next_frame().await
    }

    info!("stopped after {} frames", engine.frames());
    Ok(())
}
