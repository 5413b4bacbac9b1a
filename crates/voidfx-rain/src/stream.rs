#![forbid(unsafe_code)]

//! The horizontal data-stream engine.

use tracing::debug;

use voidfx_core::{RandomSource, Rgba, Surface};

use crate::charset::Charset;

/// Stream engine configuration.
#[derive(Debug, Clone, Copy)]
pub struct StreamConfig {
    /// Glyph alphabet the stream text is built from.
    pub charset: Charset,
    /// Stream color before per-stream opacity is applied.
    pub color: Rgba,
    /// Vertical rows between streams (2 leaves every other row empty).
    pub row_gap: u16,
    /// Stream text length range in glyphs, inclusive.
    pub min_len: usize,
    pub max_len: usize,
    /// Horizontal speed magnitude range in cells per tick.
    pub min_speed: f64,
    pub max_speed: f64,
    /// Per-stream opacity range.
    pub min_opacity: f32,
    pub max_opacity: f32,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            charset: Charset::BINARY,
            color: Rgba::rgb(34, 211, 238),
            row_gap: 2,
            min_len: 10,
            max_len: 40,
            min_speed: 1.0,
            max_speed: 4.0,
            min_opacity: 0.02,
            max_opacity: 0.22,
        }
    }
}

/// One drifting stream. Text, row, speed, and opacity are fixed at
/// creation; only the horizontal position changes.
#[derive(Debug, Clone)]
struct Stream {
    x: f64,
    y: u16,
    /// Signed: positive drifts right, negative left.
    speed: f64,
    text: String,
    opacity: f32,
}

/// A fixed count of independent horizontally drifting glyph streams.
///
/// Streams are distributed down the vertical extent, one every
/// [`StreamConfig::row_gap`] rows, each with a persistent signed speed and
/// text chosen at creation. A stream that exits the surface in its
/// direction of travel wraps to the opposite edge, offset by its own width
/// so it re-enters cleanly - streams are never lost or duplicated.
#[derive(Debug, Clone)]
pub struct StreamField {
    config: StreamConfig,
    width: u16,
    height: u16,
    streams: Vec<Stream>,
}

impl StreamField {
    /// Create a field for a `width x height` surface.
    pub fn new(config: StreamConfig, width: u16, height: u16, rng: &mut dyn RandomSource) -> Self {
        let config = StreamConfig {
            row_gap: config.row_gap.max(1),
            ..config
        };
        let streams = Self::alloc_streams(&config, width, height, rng);
        debug!(streams = streams.len(), width, height, "stream field initialized");
        Self {
            config,
            width,
            height,
            streams,
        }
    }

    fn alloc_streams(
        config: &StreamConfig,
        width: u16,
        height: u16,
        rng: &mut dyn RandomSource,
    ) -> Vec<Stream> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        let count = (height / config.row_gap) as usize;
        (0..count)
            .map(|i| {
                let len_span = config.max_len.saturating_sub(config.min_len) + 1;
                let len = config.min_len + rng.pick_index(len_span);
                let magnitude = rng.range_f64(config.min_speed, config.max_speed);
                let direction = if rng.chance(0.5) { 1.0 } else { -1.0 };
                Stream {
                    x: rng.range_f64(0.0, width as f64),
                    y: i as u16 * config.row_gap,
                    speed: magnitude * direction,
                    text: config.charset.random_string(len, rng),
                    opacity: rng.range_f64(config.min_opacity as f64, config.max_opacity as f64)
                        as f32,
                }
            })
            .collect()
    }

    /// Number of streams; `floor(height / row_gap)` (0 for an empty surface).
    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    /// Current horizontal positions, for inspection.
    pub fn positions(&self) -> Vec<f64> {
        self.streams.iter().map(|s| s.x).collect()
    }

    /// Reallocate for a new surface size; all prior stream state is
    /// discarded.
    pub fn resize(&mut self, width: u16, height: u16, rng: &mut dyn RandomSource) {
        self.width = width;
        self.height = height;
        self.streams = Self::alloc_streams(&self.config, width, height, rng);
        debug!(streams = self.streams.len(), width, height, "stream field reallocated");
    }

    /// One animation tick: redraw every stream and advance it by its speed,
    /// wrapping at the edges. A no-op on an empty surface.
    pub fn tick(&mut self, surface: &mut dyn Surface) {
        if self.streams.is_empty() {
            return;
        }

        surface.clear();

        let width = self.width as f64;
        for stream in &mut self.streams {
            let fg = self.config.color.scale(stream.opacity);
            draw_clipped(surface, stream.x, stream.y, &stream.text, fg);

            stream.x += stream.speed;

            // Wrap with the stream's own width as the off-screen margin, so
            // it re-enters from fully outside the opposite edge.
            let margin = stream.text.chars().count() as f64;
            if stream.speed > 0.0 && stream.x > width {
                stream.x = -margin;
            } else if stream.speed < 0.0 && stream.x < -margin {
                stream.x = width;
            }
        }
    }
}

/// Draw `text` at a possibly negative x, clipping glyphs left of the edge.
fn draw_clipped(surface: &mut dyn Surface, x: f64, y: u16, text: &str, fg: Rgba) {
    let xi = x.floor() as i64;
    if xi >= 0 {
        if xi <= u16::MAX as i64 {
            surface.put_str(xi as u16, y, text, fg);
        }
        return;
    }
    let skip = (-xi) as usize;
    if let Some((offset, _)) = text.char_indices().nth(skip) {
        surface.put_str(0, y, &text[offset..], fg);
    }
}
