#![forbid(unsafe_code)]

//! The render-surface contract and an in-memory implementation.
//!
//! Engines never talk to a concrete rendering API. They borrow a
//! [`Surface`] from their host, draw into it, and are otherwise oblivious
//! to whether cells end up on a terminal, a pixel canvas, or in a test
//! assertion.

use unicode_width::UnicodeWidthChar;

use crate::color::Rgba;

/// One drawable cell: a glyph and its foreground color.
///
/// The background is uniformly the surface's backdrop (black); effects only
/// ever paint foregrounds and fade them back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCell {
    /// The glyph occupying this cell.
    pub ch: char,
    /// Foreground color.
    pub fg: Rgba,
}

impl GlyphCell {
    /// An unlit cell.
    pub const EMPTY: Self = Self {
        ch: ' ',
        fg: Rgba::BLACK,
    };

    /// True if the cell shows nothing (blank glyph or faded to black).
    #[inline]
    pub fn is_dark(&self) -> bool {
        self.ch == ' ' || self.fg.is_dark()
    }
}

impl Default for GlyphCell {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// The minimal drawable contract the engines render into.
///
/// Coordinates are cells, origin top-left. Out-of-bounds draws are silently
/// clipped. The surface is borrowed from the host; engines never own or
/// resize it themselves - the host reports size changes and the engines
/// reallocate their own state in response.
pub trait Surface {
    /// Surface size in cells, `(width, height)`.
    fn size(&self) -> (u16, u16);

    /// Reset every cell to unlit.
    fn clear(&mut self);

    /// Fade every lit cell toward the backdrop by `amount` in `[0.0, 1.0]`.
    ///
    /// `fade(0.05)` darkens each cell to 95% of its brightness - repeated
    /// over ticks this is what turns previously drawn glyphs into decaying
    /// trails. Cells that fade out completely are retired to [`GlyphCell::EMPTY`].
    fn fade(&mut self, amount: f32);

    /// Draw one glyph at a cell coordinate.
    fn put(&mut self, x: u16, y: u16, ch: char, fg: Rgba);

    /// Draw a string starting at a cell coordinate, advancing by each
    /// glyph's display width. Control and zero-width characters are skipped.
    fn put_str(&mut self, x: u16, y: u16, s: &str, fg: Rgba) {
        let mut cx = x as u32;
        let (width, _) = self.size();
        for ch in s.chars() {
            let w = ch.width().unwrap_or(0) as u32;
            if w == 0 {
                continue;
            }
            if cx >= width as u32 {
                break;
            }
            self.put(cx as u16, y, ch, fg);
            cx += w;
        }
    }
}

/// A plain `width x height` grid of [`GlyphCell`]s.
///
/// Serves as the headless surface for tests and as the backing store of the
/// terminal backend. Row-major storage, reallocated wholesale on resize.
#[derive(Debug, Clone)]
pub struct CellBuffer {
    width: u16,
    height: u16,
    cells: Vec<GlyphCell>,
}

impl CellBuffer {
    /// Create a buffer of unlit cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![GlyphCell::EMPTY; width as usize * height as usize],
        }
    }

    /// Resize, discarding all contents.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, GlyphCell::EMPTY);
    }

    /// Cell at `(x, y)`, or `None` out of bounds.
    pub fn get(&self, x: u16, y: u16) -> Option<&GlyphCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize)
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[GlyphCell] {
        &self.cells
    }

    /// Count of cells currently lit (non-dark).
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_dark()).count()
    }

    /// The glyphs of row `y` as a string (for test assertions).
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = y as usize * self.width as usize;
        self.cells[start..start + self.width as usize]
            .iter()
            .map(|c| c.ch)
            .collect()
    }
}

impl Surface for CellBuffer {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.cells.fill(GlyphCell::EMPTY);
    }

    fn fade(&mut self, amount: f32) {
        let keep = 1.0 - amount.clamp(0.0, 1.0);
        for cell in &mut self.cells {
            if cell.ch == ' ' {
                continue;
            }
            cell.fg = cell.fg.scale(keep);
            if cell.fg.is_dark() {
                *cell = GlyphCell::EMPTY;
            }
        }
    }

    fn put(&mut self, x: u16, y: u16, ch: char, fg: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.cells[y as usize * self.width as usize + x as usize] = GlyphCell { ch, fg };
    }
}

#[cfg(test)]
mod tests {
    use super::{CellBuffer, GlyphCell, Surface};
    use crate::color::Rgba;

    #[test]
    fn put_and_get_roundtrip() {
        let mut buf = CellBuffer::new(10, 4);
        buf.put(3, 2, 'X', Rgba::WHITE);
        assert_eq!(
            buf.get(3, 2),
            Some(&GlyphCell {
                ch: 'X',
                fg: Rgba::WHITE
            })
        );
        assert_eq!(buf.get(0, 0), Some(&GlyphCell::EMPTY));
    }

    #[test]
    fn out_of_bounds_draws_are_clipped() {
        let mut buf = CellBuffer::new(4, 4);
        buf.put(4, 0, 'X', Rgba::WHITE);
        buf.put(0, 4, 'X', Rgba::WHITE);
        assert_eq!(buf.lit_count(), 0);
        assert_eq!(buf.get(4, 0), None);
    }

    #[test]
    fn clear_unlights_everything() {
        let mut buf = CellBuffer::new(4, 4);
        buf.put(1, 1, 'A', Rgba::WHITE);
        buf.clear();
        assert_eq!(buf.lit_count(), 0);
    }

    #[test]
    fn fade_decays_and_retires_cells() {
        let mut buf = CellBuffer::new(2, 1);
        buf.put(0, 0, 'A', Rgba::rgb(0, 255, 170));
        for _ in 0..200 {
            buf.fade(0.08);
        }
        // Fully decayed trail cells are retired to EMPTY, not left as
        // invisible glyphs.
        assert_eq!(buf.get(0, 0), Some(&GlyphCell::EMPTY));
    }

    #[test]
    fn put_str_advances_by_display_width() {
        let mut buf = CellBuffer::new(10, 1);
        buf.put_str(0, 0, "a漢b", Rgba::WHITE);
        assert_eq!(buf.get(0, 0).unwrap().ch, 'a');
        assert_eq!(buf.get(1, 0).unwrap().ch, '漢');
        // The wide glyph spans two columns; the next glyph lands after it.
        assert_eq!(buf.get(3, 0).unwrap().ch, 'b');
    }

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut buf = CellBuffer::new(3, 1);
        buf.put_str(0, 0, "abcdef", Rgba::WHITE);
        assert_eq!(buf.row_text(0), "abc");
    }

    #[test]
    fn resize_discards_contents() {
        let mut buf = CellBuffer::new(4, 4);
        buf.put(1, 1, 'A', Rgba::WHITE);
        buf.resize(6, 2);
        assert_eq!(buf.size(), (6, 2));
        assert_eq!(buf.lit_count(), 0);
    }

    #[test]
    fn zero_sized_buffer_is_inert() {
        let mut buf = CellBuffer::new(0, 0);
        buf.put(0, 0, 'X', Rgba::WHITE);
        buf.fade(0.5);
        buf.clear();
        assert_eq!(buf.cells().len(), 0);
    }
}
