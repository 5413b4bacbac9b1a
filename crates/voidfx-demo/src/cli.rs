#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `VOIDFX_DEMO_*` prefix.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
voidfx-demo - glyph rain and typewriter effects in your terminal

USAGE:
    voidfx-demo [OPTIONS]

OPTIONS:
    --scene=NAME        Scene: 'landing' (default), 'about', or 'streams'
    --fps=N             Tick rate in frames per second (default: 30)
    --seed=N            Random seed; equal seeds replay the same rain (default: 42)
    --duration-ms=N     Exit automatically after N milliseconds
    --help, -h          Show this help message
    --version, -V       Show version

SCENES:
    landing    Falling glyph rain behind a typewriter intro
    about      Multi-line typewriter reveal with gradient tint
    streams    Horizontal binary data streams

KEYBINDINGS:
    q / Esc / Ctrl+C    Quit

ENVIRONMENT VARIABLES:
    VOIDFX_DEMO_SCENE         Override --scene
    VOIDFX_DEMO_FPS           Override --fps
    VOIDFX_DEMO_SEED          Override --seed
    VOIDFX_LOG                Enable file logging (tracing filter, e.g. 'debug')
";

/// Parsed options.
#[derive(Debug, Clone)]
pub struct Opts {
    pub scene: String,
    pub fps: u32,
    pub seed: u64,
    pub duration_ms: Option<u64>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            scene: "landing".to_string(),
            fps: 30,
            seed: 42,
            duration_ms: None,
        }
    }
}

impl Opts {
    /// Parse from process args and environment. Exits on `--help`,
    /// `--version`, or a malformed flag.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        if let Ok(scene) = env::var("VOIDFX_DEMO_SCENE") {
            opts.scene = scene;
        }
        if let Ok(fps) = env::var("VOIDFX_DEMO_FPS") {
            opts.fps = parse_num(&fps, "VOIDFX_DEMO_FPS");
        }
        if let Ok(seed) = env::var("VOIDFX_DEMO_SEED") {
            opts.seed = parse_num(&seed, "VOIDFX_DEMO_SEED");
        }

        for arg in env::args().skip(1) {
            if arg == "--help" || arg == "-h" {
                print!("{HELP_TEXT}");
                process::exit(0);
            }
            if arg == "--version" || arg == "-V" {
                println!("voidfx-demo {VERSION}");
                process::exit(0);
            }
            if let Some(value) = arg.strip_prefix("--scene=") {
                opts.scene = value.to_string();
            } else if let Some(value) = arg.strip_prefix("--fps=") {
                opts.fps = parse_num(value, "--fps");
            } else if let Some(value) = arg.strip_prefix("--seed=") {
                opts.seed = parse_num(value, "--seed");
            } else if let Some(value) = arg.strip_prefix("--duration-ms=") {
                opts.duration_ms = Some(parse_num(value, "--duration-ms"));
            } else {
                eprintln!("Unknown option: {arg}");
                eprintln!("Try --help for usage.");
                process::exit(2);
            }
        }

        if opts.fps == 0 {
            eprintln!("--fps must be at least 1");
            process::exit(2);
        }
        opts
    }
}

fn parse_num<T: std::str::FromStr>(value: &str, what: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        eprintln!("Invalid value for {what}: {value}");
        process::exit(2);
    })
}
