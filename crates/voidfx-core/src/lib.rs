#![forbid(unsafe_code)]

//! Core building blocks for the voidfx effect engines.
//!
//! This crate carries no effect logic of its own. It provides the pieces the
//! engines share:
//!
//! - [`geometry::Rect`] - cell-coordinate rectangles.
//! - [`color::Rgba`] - packed RGBA color with fade/lerp helpers.
//! - [`rng::RandomSource`] - pluggable randomness, so tests can script the
//!   exact sequence an engine observes.
//! - [`clock`] - accumulated animation time and the per-frame self-throttle.
//! - [`surface::Surface`] - the minimal drawable contract the engines render
//!   into, with an in-memory [`surface::CellBuffer`] for headless use.

pub mod clock;
pub mod color;
pub mod geometry;
pub mod rng;
pub mod surface;

pub use clock::{AnimationClock, FrameThrottle};
pub use color::Rgba;
pub use geometry::Rect;
pub use rng::{Lcg64, RandomSource};
pub use surface::{CellBuffer, GlyphCell, Surface};
