#![forbid(unsafe_code)]

//! Terminal backend for the voidfx engines.
//!
//! - [`TermSession`] - RAII guard over raw mode, the alternate screen, and
//!   cursor visibility; restores the terminal on drop, early exits included.
//! - [`TermSurface`] - a [`Surface`](voidfx_core::Surface) backed by a cell
//!   buffer, presented to the terminal by diffing against the previously
//!   presented frame.
//! - [`Runner`] - the lifecycle host: a single-threaded fixed-rate tick
//!   loop that pumps input, dispatches resizes synchronously, and tears
//!   everything down on exit so no tick ever runs against a dead surface.

pub mod runner;
pub mod session;
pub mod surface;

pub use runner::{Runner, RunnerConfig, Scene};
pub use session::TermSession;
pub use surface::TermSurface;
