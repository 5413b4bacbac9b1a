#![forbid(unsafe_code)]

//! Opt-in file logging.
//!
//! The demo owns the terminal; a subscriber writing to stdout or stderr
//! would corrupt the live frame. Logging is therefore off unless
//! `VOIDFX_LOG` is set, and goes to a file next to the binary's working
//! directory.

use std::env;
use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "voidfx-demo.log";

/// Install the file subscriber when `VOIDFX_LOG` holds a tracing filter
/// (e.g. `debug` or `voidfx_rain=trace`). Silently does nothing otherwise.
pub fn init() {
    let Ok(filter) = env::var("VOIDFX_LOG") else {
        return;
    };
    let Ok(file) = File::create(LOG_FILE) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    tracing::info!("logging to {LOG_FILE}");
}
