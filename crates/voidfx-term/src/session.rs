#![forbid(unsafe_code)]

//! Terminal session guard.

use std::io::{self, Write};

use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{cursor, execute};
use tracing::debug;

/// RAII guard over terminal state.
///
/// On creation: raw mode on, alternate screen entered, cursor hidden,
/// screen cleared. On drop the inverse runs in reverse order, errors
/// ignored - restoration is best-effort because drop may run during
/// unwinding, and a half-restored terminal beats a panic in a panic.
#[derive(Debug)]
pub struct TermSession {
    restored: bool,
}

impl TermSession {
    /// Acquire the terminal.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(
            stdout,
            EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        ) {
            // Don't leave raw mode stuck on if the screen switch failed.
            let _ = disable_raw_mode();
            return Err(e);
        }
        debug!("terminal session acquired");
        Ok(Self { restored: false })
    }

    /// Restore the terminal explicitly, reporting errors.
    ///
    /// Idempotent; `drop` performs the same restoration silently if this
    /// was never called.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        let mut stdout = io::stdout();
        execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        stdout.flush()?;
        debug!("terminal session restored");
        Ok(())
    }
}

impl Drop for TermSession {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        let _ = stdout.flush();
    }
}
