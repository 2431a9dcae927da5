use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use stardrift::cli::args::Args;
use stardrift::services::animation;
use stardrift::SceneConfig;

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let mut config = SceneConfig::default();
    args.apply(&mut config);
    if let Err(e) = config.validate() {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    info!(
        "starting: {}x{}, seed {}, motion {}",
        args.width,
        args.height,
        config.seed,
        config.motion.name()
    );
    let frame_limit = args.frames;
    macroquad::Window::from_config(args.window_conf(), async move {
        if let Err(e) = animation::run(config, frame_limit).await {
            error!("{}", e);
            std::process::exit(1);
        }
    });
    ExitCode::SUCCESS
}
