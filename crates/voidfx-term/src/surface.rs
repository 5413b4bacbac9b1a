#![forbid(unsafe_code)]

//! Crossterm-backed render surface.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use tracing::trace;
use unicode_width::UnicodeWidthChar;

use voidfx_core::{CellBuffer, GlyphCell, Rgba, Surface};

/// A terminal surface: engines draw into an in-memory [`CellBuffer`];
/// [`present`](TermSurface::present) diffs against the previously presented
/// frame and writes only changed cells.
#[derive(Debug)]
pub struct TermSurface {
    buf: CellBuffer,
    /// Cells as last presented, row-major. Same length as `buf`.
    shown: Vec<GlyphCell>,
}

impl TermSurface {
    /// Create a surface of the given size, assuming a freshly cleared
    /// screen.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buf: CellBuffer::new(width, height),
            shown: vec![GlyphCell::EMPTY; width as usize * height as usize],
        }
    }

    /// Resize to the new terminal dimensions and clear the screen; both the
    /// working buffer and the presented state start over.
    pub fn resize(&mut self, width: u16, height: u16) -> io::Result<()> {
        self.buf.resize(width, height);
        self.shown.clear();
        self.shown
            .resize(width as usize * height as usize, GlyphCell::EMPTY);
        let mut stdout = io::stdout();
        queue!(stdout, Clear(ClearType::All))?;
        stdout.flush()
    }

    /// The backing cell buffer (for inspection).
    pub fn buffer(&self) -> &CellBuffer {
        &self.buf
    }

    /// Write changed cells to the terminal.
    pub fn present(&mut self) -> io::Result<()> {
        let (width, height) = self.buf.size();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut last_fg: Option<Rgba> = None;
        let mut written = 0usize;

        for y in 0..height {
            let mut x = 0u16;
            while x < width {
                let idx = y as usize * width as usize + x as usize;
                let cell = self.buf.cells()[idx];
                let glyph_width = cell.ch.width().unwrap_or(1).max(1) as u16;

                if self.shown[idx] != cell {
                    queue!(out, MoveTo(x, y))?;
                    if last_fg != Some(cell.fg) {
                        queue!(
                            out,
                            SetForegroundColor(Color::Rgb {
                                r: cell.fg.r(),
                                g: cell.fg.g(),
                                b: cell.fg.b(),
                            })
                        )?;
                        last_fg = Some(cell.fg);
                    }
                    queue!(out, Print(cell.ch))?;
                    self.shown[idx] = cell;
                    written += 1;
                    // A wide glyph covers the following column; mark its
                    // spillover as presented so we don't print over it.
                    if glyph_width == 2 && x + 1 < width {
                        self.shown[idx + 1] = self.buf.cells()[idx + 1];
                    }
                }
                x += glyph_width;
            }
        }

        out.flush()?;
        trace!(cells = written, "frame presented");
        Ok(())
    }
}

impl Surface for TermSurface {
    fn size(&self) -> (u16, u16) {
        self.buf.size()
    }

    fn clear(&mut self) {
        self.buf.clear();
    }

    fn fade(&mut self, amount: f32) {
        self.buf.fade(amount);
    }

    fn put(&mut self, x: u16, y: u16, ch: char, fg: Rgba) {
        self.buf.put(x, y, ch, fg);
    }
}
