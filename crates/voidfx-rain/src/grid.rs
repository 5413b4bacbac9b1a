#![forbid(unsafe_code)]

//! The falling-column rain engine.

use tracing::debug;

use voidfx_core::{RandomSource, Surface};

use crate::charset::Charset;
use crate::palette::RainPalette;

/// How drop positions are seeded so columns don't start in lockstep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartStagger {
    /// Every column starts at the top edge.
    Top,
    /// Each column starts a random number of rows above the surface,
    /// up to the given count. Columns then fall into view one by one.
    Scattered(u16),
}

/// Rain engine configuration.
#[derive(Debug, Clone, Copy)]
pub struct GridConfig {
    /// Rows/columns per glyph cell. 1 on a terminal surface; larger values
    /// space the columns out the way a pixel font size would.
    pub cell_size: u16,
    /// Glyph alphabet.
    pub charset: Charset,
    /// Color tiers.
    pub palette: RainPalette,
    /// Per-tick trail fade amount in `[0.0, 1.0]`.
    pub trail_fade: f32,
    /// Probability per tick that an off-screen drop resets to the top.
    /// Kept well below 1.0 so column resets stagger instead of forming
    /// synchronized waves.
    pub reset_chance: f64,
    /// Initial drop placement.
    pub stagger: StartStagger,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 1,
            charset: Charset::MATRIX,
            palette: RainPalette::matrix(),
            trail_fade: 0.05,
            reset_chance: 0.025,
            stagger: StartStagger::Scattered(100),
        }
    }
}

/// A fixed-width grid of independently falling glyph columns.
///
/// One drop position per column, in row units. Every tick each column draws
/// a fresh random glyph in a weighted-random color at its drop position and
/// falls one row; once past the bottom edge it holds just off-screen and
/// rolls [`GridConfig::reset_chance`] until it respawns at the top. The
/// surface itself carries the trails: old glyphs stay put and are faded a
/// step darker each tick.
#[derive(Debug, Clone)]
pub struct RainGrid {
    config: GridConfig,
    width: u16,
    height: u16,
    drops: Vec<f64>,
}

impl RainGrid {
    /// Create a grid for a `width x height` surface.
    pub fn new(config: GridConfig, width: u16, height: u16, rng: &mut dyn RandomSource) -> Self {
        let config = GridConfig {
            cell_size: config.cell_size.max(1),
            ..config
        };
        let drops = Self::alloc_drops(&config, width, height, rng);
        debug!(
            columns = drops.len(),
            width, height, "rain grid initialized"
        );
        Self {
            config,
            width,
            height,
            drops,
        }
    }

    fn alloc_drops(
        config: &GridConfig,
        width: u16,
        height: u16,
        rng: &mut dyn RandomSource,
    ) -> Vec<f64> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        let columns = (width / config.cell_size) as usize;
        (0..columns)
            .map(|_| match config.stagger {
                StartStagger::Top => 0.0,
                StartStagger::Scattered(rows) => -rng.next_f64() * rows as f64,
            })
            .collect()
    }

    /// Number of columns; always `floor(width / cell_size)` (0 for an
    /// empty surface).
    pub fn column_count(&self) -> usize {
        self.drops.len()
    }

    /// Drop positions in row units. Negative while a column is still above
    /// the surface.
    pub fn drops(&self) -> &[f64] {
        &self.drops
    }

    /// Rows visible on the surface.
    pub fn rows(&self) -> u16 {
        self.height / self.config.cell_size
    }

    /// Reallocate for a new surface size. All per-column state from before
    /// the resize is discarded; no remapping is attempted.
    pub fn resize(&mut self, width: u16, height: u16, rng: &mut dyn RandomSource) {
        self.width = width;
        self.height = height;
        self.drops = Self::alloc_drops(&self.config, width, height, rng);
        debug!(
            columns = self.drops.len(),
            width, height, "rain grid reallocated"
        );
    }

    /// One animation tick: fade trails, draw every column's glyph, advance
    /// or reset each drop. A no-op on an empty surface.
    pub fn tick(&mut self, surface: &mut dyn Surface, rng: &mut dyn RandomSource) {
        if self.drops.is_empty() {
            return;
        }

        surface.fade(self.config.trail_fade);

        let cell = self.config.cell_size;
        let height = self.height as f64;
        for (col, drop) in self.drops.iter_mut().enumerate() {
            let glyph = self.config.charset.pick(rng);
            let color = self.config.palette.sample(rng);

            let row = drop.floor();
            if row >= 0.0 {
                let y = row as u64 * cell as u64;
                if y < self.height as u64 {
                    surface.put(col as u16 * cell, y as u16, glyph, color);
                }
            }

            if *drop * cell as f64 > height {
                // Off the bottom edge: hold here and roll the respawn.
                if rng.chance(self.config.reset_chance) {
                    *drop = 0.0;
                }
            } else {
                *drop += 1.0;
            }
        }
    }
}
