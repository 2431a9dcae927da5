use crate::render::color::Color;

pub const DEFAULT_SURFACE_WIDTH: u32 = 1280;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 720;

pub const DEFAULT_SEED: u64 = 0;
pub const DEFAULT_SHIP_SIZE: f64 = 30.0;

/// Stars per cluster when a config does not say otherwise.
pub const DEFAULT_CLUSTER_COUNT: usize = 100;
pub const DEFAULT_CLUSTER_VELOCITY: (f64, f64) = (5.0, 5.0);

/// Scene clusters as (radius, count, initial velocity), largest first.
pub const SCENE_CLUSTERS: [(f64, usize, (f64, f64)); 3] = [
    (4.0, 50, (4.0, 4.0)),
    (3.0, 50, (3.0, 3.0)),
    (1.0, 50, (2.0, 2.0)),
];

pub const BACKGROUND_COLOR: Color = Color::from_rgb(0x15, 0x15, 0x15);
pub const STAR_COLOR: Color = Color::WHITE;
pub const SHIP_FILL_COLOR: Color = Color::YELLOW;
pub const SHIP_STROKE_COLOR: Color = Color::ORANGE;
pub const SHIP_LINE_WIDTH: f64 = 4.0;

pub const GLOW_BLUR: f64 = 30.0;
pub const GLOW_COLOR: Color = Color::WHITE;

/// Frames between frame-time log lines.
pub const FRAME_LOG_INTERVAL: u64 = 600;
