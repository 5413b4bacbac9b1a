#![forbid(unsafe_code)]

//! Text reveal effects.
//!
//! The text reveal engine advances a cursor through source text on a fixed
//! tick interval, producing a progressively lengthening visible prefix -
//! the classic terminal typewriter. Two shapes:
//!
//! - [`LineReveal`] - reveals an ordered list of lines, one character per
//!   tick, with a one-tick pause on each line transition.
//! - [`StringReveal`] - reveals a single flattened string and stops.
//!
//! Both are pure state machines: no timers, no rendering API. The host owns
//! the tick schedule and hands the engine a
//! [`Surface`](voidfx_core::Surface) to draw into.
//!
//! [`Glitch`] and [`ColorGradient`] are render-time decorations layered on
//! top of the revealed text.

pub mod cursor;
pub mod glitch;
pub mod gradient;
pub mod reveal;

pub use cursor::CursorStyle;
pub use glitch::Glitch;
pub use gradient::ColorGradient;
pub use reveal::{LineReveal, StringReveal};
