#![forbid(unsafe_code)]

//! Glyph-rain engines.
//!
//! Two independent engines share the same contract - allocate per-surface
//! state on init, mutate it in place once per tick, reallocate wholesale on
//! resize, degrade to an inert empty state on a zero-sized surface:
//!
//! - [`RainGrid`] - a fixed-width grid of independently falling glyph
//!   columns with decaying trails and probabilistic, staggered resets.
//! - [`StreamField`] - a fixed count of horizontally drifting glyph
//!   streams that wrap around the surface edges.
//!
//! Randomness (glyph choice, color tier, reset rolls) flows through
//! [`RandomSource`](voidfx_core::RandomSource); equal seeds replay the
//! exact same rain.

pub mod charset;
pub mod grid;
pub mod palette;
pub mod stream;

pub use charset::Charset;
pub use grid::{GridConfig, RainGrid, StartStagger};
pub use palette::RainPalette;
pub use stream::{StreamConfig, StreamField};
