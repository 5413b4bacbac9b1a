#![forbid(unsafe_code)]

//! The text reveal engine.

use tracing::debug;
use unicode_width::UnicodeWidthStr;

use voidfx_core::{Rect, Rgba, Surface};

use crate::cursor::CursorStyle;

/// Multi-line typewriter reveal.
///
/// Owns an immutable list of source lines and reveals them one character
/// per tick, top to bottom. Each line's visible text is always a prefix of
/// its source line; a line transition costs exactly one tick, so per-char
/// pacing is uniform across the whole block (empty lines included).
///
/// The host drives [`advance`](LineReveal::advance) from its tick schedule
/// and may stop at any time; partial state is simply dropped.
#[derive(Debug, Clone)]
pub struct LineReveal {
    lines: Vec<String>,
    line_idx: usize,
    char_idx: usize,
    /// Char count of the current line; 0 once complete.
    line_len: usize,
    /// Byte offset of the reveal point within the current line.
    byte_pos: usize,
    revealed: Vec<String>,
    total_revealed: usize,
}

impl LineReveal {
    /// Create a reveal over `lines`. An empty list is complete immediately.
    pub fn new(lines: Vec<String>) -> Self {
        let (revealed, line_len) = if lines.is_empty() {
            (Vec::new(), 0)
        } else {
            (vec![String::new()], lines[0].chars().count())
        };
        Self {
            lines,
            line_idx: 0,
            char_idx: 0,
            line_len,
            byte_pos: 0,
            revealed,
            total_revealed: 0,
        }
    }

    /// One reveal tick.
    ///
    /// While the current line has characters left, extends its visible
    /// prefix by one; once exhausted, spends one tick moving to the next
    /// line (appending its empty entry). A no-op once complete.
    pub fn advance(&mut self) {
        if self.is_complete() {
            return;
        }

        if self.char_idx <= self.line_len {
            // Reveal tick: visible prefix grows to `char_idx` characters.
            // (`char_idx == 0` is the empty-prefix tick of the first line.)
            if self.char_idx > 0 {
                let line = &self.lines[self.line_idx];
                if let Some(ch) = line[self.byte_pos..].chars().next() {
                    self.byte_pos += ch.len_utf8();
                    self.revealed[self.line_idx].push(ch);
                    self.total_revealed += 1;
                }
            }
            self.char_idx += 1;
        } else {
            // Line exhausted: transition. The next line's empty entry is
            // appended here, which is its zero-length reveal state, so its
            // first reveal tick starts at one character.
            self.line_idx += 1;
            self.char_idx = 1;
            self.byte_pos = 0;
            if self.line_idx < self.lines.len() {
                self.revealed.push(String::new());
                self.line_len = self.lines[self.line_idx].chars().count();
            } else {
                self.line_len = 0;
                debug!(
                    lines = self.lines.len(),
                    chars = self.total_revealed,
                    "line reveal complete"
                );
            }
        }
    }

    /// True once every line has been fully revealed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.line_idx >= self.lines.len()
    }

    /// The source lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The visible prefixes, one per line touched so far.
    pub fn revealed(&self) -> &[String] {
        &self.revealed
    }

    /// Index of the line currently being revealed.
    pub fn current_line(&self) -> usize {
        self.line_idx
    }

    /// Total characters revealed so far; non-decreasing across ticks.
    pub fn visible_chars(&self) -> usize {
        self.total_revealed
    }

    /// Draw the revealed block into `area`, one row per line, top-aligned.
    /// Lines below the area are clipped.
    ///
    /// `tint` maps a line index to its color. While incomplete, `cursor` is
    /// drawn after the active line's last revealed character.
    pub fn render(
        &self,
        area: Rect,
        surface: &mut dyn Surface,
        tint: impl Fn(usize) -> Rgba,
        cursor: Option<(CursorStyle, Rgba)>,
    ) {
        if area.is_empty() {
            return;
        }
        for (i, line) in self.revealed.iter().enumerate() {
            if i >= area.height as usize {
                break;
            }
            let row = area.y.saturating_add(i as u16);
            surface.put_str(area.x, row, line, tint(i));
            if i == self.line_idx
                && !self.is_complete()
                && let Some((style, fg)) = cursor
            {
                let cx = area.x.saturating_add(line.width() as u16);
                surface.put(cx, row, style.glyph(), fg);
            }
        }
    }
}

/// Flattened single-string reveal.
///
/// No line bookkeeping: each tick emits one more character, and the engine
/// stops after the full string has been emitted once.
#[derive(Debug, Clone)]
pub struct StringReveal {
    text: String,
    byte_pos: usize,
    char_pos: usize,
}

impl StringReveal {
    /// Create a reveal over `text`. Empty text is complete immediately.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            byte_pos: 0,
            char_pos: 0,
        }
    }

    /// Reveal one more character; a no-op once the full string is visible.
    pub fn advance(&mut self) {
        if let Some(ch) = self.text[self.byte_pos..].chars().next() {
            self.byte_pos += ch.len_utf8();
            self.char_pos += 1;
        }
    }

    /// True once the full string is visible.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.byte_pos >= self.text.len()
    }

    /// The visible prefix.
    pub fn visible(&self) -> &str {
        &self.text[..self.byte_pos]
    }

    /// Characters revealed so far.
    pub fn visible_chars(&self) -> usize {
        self.char_pos
    }

    /// The full source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Draw the visible prefix on `area`'s top row, with a trailing cursor
    /// while incomplete.
    pub fn render(
        &self,
        area: Rect,
        surface: &mut dyn Surface,
        fg: Rgba,
        cursor: Option<(CursorStyle, Rgba)>,
    ) {
        if area.is_empty() {
            return;
        }
        surface.put_str(area.x, area.y, self.visible(), fg);
        if !self.is_complete()
            && let Some((style, cfg)) = cursor
        {
            let cx = area.x.saturating_add(self.visible().width() as u16);
            surface.put(cx, area.y, style.glyph(), cfg);
        }
    }
}
