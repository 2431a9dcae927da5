use clap::Parser;
use macroquad::window::Conf;

use crate::models::config::{MotionPolicy, SceneConfig};
use crate::models::constants::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};

/// Animated starfield with a ship that follows the pointer.
#[derive(Parser, Debug)]
#[command(name = "stardrift", version, about)]
pub struct Args {
    /// Window width in pixels.
    #[arg(long, default_value_t = DEFAULT_SURFACE_WIDTH)]
    pub width: u32,

    /// Window height in pixels.
    #[arg(long, default_value_t = DEFAULT_SURFACE_HEIGHT)]
    pub height: u32,

    /// Seed for star placement.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Ship size in pixels.
    #[arg(long)]
    pub ship_size: Option<f64>,

    /// Star motion policy.
    #[arg(long, value_enum)]
    pub motion: Option<MotionPolicy>,

    /// Stop after this many frames.
    #[arg(long)]
    pub frames: Option<u64>,

    /// Default log filter (error, warn, info, debug, trace). RUST_LOG wins.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Apply command-line overrides to a scene config.
    pub fn apply(&self, config: &mut SceneConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(size) = self.ship_size {
            config.ship_size = size;
        }
        if let Some(motion) = self.motion {
            config.motion = motion;
        }
    }

    /// Window settings. The surface is sized once and never resized.
    pub fn window_conf(&self) -> Conf {
        Conf {
            window_title: "stardrift".to_owned(),
            window_width: self.width as i32,
            window_height: self.height as i32,
            window_resizable: false,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_config_untouched() {
        let args = Args::parse_from(["stardrift"]);
        let mut config = SceneConfig::default();
        args.apply(&mut config);
        assert_eq!(config, SceneConfig::default());
        assert_eq!(args.width, DEFAULT_SURFACE_WIDTH);
        assert_eq!(args.log_level, "info");
        assert_eq!(args.frames, None);
    }

    #[test]
    fn overrides_apply() {
        let args = Args::parse_from([
            "stardrift",
            "--seed",
            "9",
            "--ship-size",
            "12.5",
            "--motion",
            "steer",
            "--frames",
            "60",
        ]);
        let mut config = SceneConfig::default();
        args.apply(&mut config);
        assert_eq!(config.seed, 9);
        assert_eq!(config.ship_size, 12.5);
        assert_eq!(config.motion, MotionPolicy::Steer);
        assert_eq!(args.frames, Some(60));
    }

    #[test]
    fn window_conf_uses_requested_size() {
        let args = Args::parse_from(["stardrift", "--width", "640", "--height", "480"]);
        let conf = args.window_conf();
        assert_eq!(conf.window_width, 640);
        assert_eq!(conf.window_height, 480);
        assert!(!conf.window_resizable);
    }

    #[test]
    fn rejects_unknown_motion() {
        assert!(Args::try_parse_from(["stardrift", "--motion", "warp"]).is_err());
    }
}
