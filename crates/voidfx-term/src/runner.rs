#![forbid(unsafe_code)]

//! The fixed-rate lifecycle host.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use tracing::{debug, info};

use crate::session::TermSession;
use crate::surface::TermSurface;

/// A scene the runner drives: one tick per interval, resize notifications
/// in between.
///
/// Ticks for a scene are strictly sequential - the loop is single-threaded,
/// so a resize observed between ticks is always fully applied before the
/// next tick runs.
pub trait Scene {
    /// One animation tick. `now` is time since the runner started; scenes
    /// use it to drive their own throttles and reveal timers.
    fn tick(&mut self, surface: &mut TermSurface, now: Duration);

    /// The terminal was resized. Engines reallocate here.
    fn resize(&mut self, _width: u16, _height: u16) {}
}

/// Runner configuration.
#[derive(Debug, Clone, Copy)]
pub struct RunnerConfig {
    /// Interval between ticks.
    pub tick_rate: Duration,
    /// Exit automatically after this long; `None` runs until a quit key.
    pub duration: Option<Duration>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(33),
            duration: None,
        }
    }
}

/// Owns the tick loop and the terminal session.
///
/// `q`, `Esc`, and `Ctrl+C` quit. On any exit path the session guard
/// restores the terminal and the loop stops scheduling ticks, so nothing
/// ever fires against a torn-down surface.
#[derive(Debug)]
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Create a runner with the given configuration.
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Run `scene` until quit, duration expiry, or an I/O error.
    pub fn run(&self, scene: &mut dyn Scene) -> io::Result<()> {
        let mut session = TermSession::new()?;
        let result = self.event_loop(scene);
        let restored = session.restore();
        // A loop failure outranks a restore failure in the report.
        result.and(restored)
    }

    fn event_loop(&self, scene: &mut dyn Scene) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        let mut surface = TermSurface::new(width, height);
        scene.resize(width, height);
        info!(width, height, tick_ms = self.config.tick_rate.as_millis() as u64, "runner started");

        let start = Instant::now();
        let mut last_tick = Instant::now();

        loop {
            if let Some(duration) = self.config.duration
                && start.elapsed() >= duration
            {
                debug!("runner duration elapsed");
                return Ok(());
            }

            let timeout = self.config.tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        let ctrl_c = key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL);
                        if ctrl_c
                            || key.code == KeyCode::Char('q')
                            || key.code == KeyCode::Esc
                        {
                            debug!("quit key received");
                            return Ok(());
                        }
                    }
                    Event::Resize(w, h) => {
                        // Synchronous reallocation: the next tick observes
                        // the new state, never a half-resized one.
                        surface.resize(w, h)?;
                        scene.resize(w, h);
                        debug!(width = w, height = h, "resize applied");
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= self.config.tick_rate {
                last_tick = Instant::now();
                scene.tick(&mut surface, start.elapsed());
                surface.present()?;
            }
        }
    }
}
