#![forbid(unsafe_code)]

//! voidfx demo binary entry point.

mod cli;
mod logging;
mod scenes;

use std::time::Duration;

use voidfx_term::{Runner, RunnerConfig, Scene};

use crate::scenes::{AboutScene, LandingScene, StreamsScene};

fn main() {
    let opts = cli::Opts::parse();
    logging::init();

    let mut scene: Box<dyn Scene> = match opts.scene.as_str() {
        "landing" => Box::new(LandingScene::new(opts.seed)),
        "about" => Box::new(AboutScene::new(opts.seed)),
        "streams" => Box::new(StreamsScene::new(opts.seed)),
        other => {
            eprintln!(
                "Unknown scene '{other}'; expected one of: {}",
                scenes::SCENE_NAMES.join(", ")
            );
            std::process::exit(2);
        }
    };

    let config = RunnerConfig {
        tick_rate: Duration::from_secs_f64(1.0 / opts.fps as f64),
        duration: opts.duration_ms.map(Duration::from_millis),
    };

    if let Err(e) = Runner::new(config).run(scene.as_mut()) {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}
