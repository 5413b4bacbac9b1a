#![forbid(unsafe_code)]

//! About scene: multi-line typewriter reveal with a gradient tint.

use std::time::Duration;

use voidfx_core::{FrameThrottle, Lcg64, Rgba, Surface};
use voidfx_term::{Scene, TermSurface};
use voidfx_text::{ColorGradient, CursorStyle, Glitch, LineReveal};

const TITLE: &str = "About this system";
const PROMPT: &str = "[void0ps@about]$ cat philosophy.log";

const ABOUT_LINES: &[&str] = &[
    "Life itself ships with no predefined return value.",
    "You can build meaning the way you build software,",
    "but in an entropy-bound universe every life is a",
    "process running from launch to crash.",
    "",
    "We may never escape the sandbox of this solar system;",
    "we are all observers at the bottom of our own wells.",
    "",
    "Since the system boundary won't change, focus on the",
    "runtime you actually have. Go find the bugs and the",
    "exploits you truly love.",
    "",
    "Keep Hacking, and Try Harder.",
];

const PURPLE: Rgba = Rgba::rgb(168, 85, 247);
const DIM: Rgba = Rgba::rgb(113, 113, 122);

/// The about page, terminal edition: a fixed header, then the philosophy
/// block revealing at one character per 40 ms, each line tinted by a
/// purple-to-cyan sweep.
pub struct AboutScene {
    rng: Lcg64,
    reveal: LineReveal,
    gradient: ColorGradient,
    glitch: Glitch,
    type_throttle: FrameThrottle,
}

impl AboutScene {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Lcg64::new(seed),
            reveal: LineReveal::new(ABOUT_LINES.iter().map(|s| s.to_string()).collect()),
            gradient: ColorGradient::void(),
            glitch: Glitch::new(0.08),
            type_throttle: FrameThrottle::new(Duration::from_millis(40)),
        }
    }
}

impl Scene for AboutScene {
    fn tick(&mut self, surface: &mut TermSurface, now: Duration) {
        if self.type_throttle.admit(now) {
            self.reveal.advance();
        }

        surface.clear();
        let (width, height) = surface.size();
        if width == 0 || height == 0 {
            return;
        }

        let left = width.saturating_sub(56) / 2;
        let title = self.glitch.corrupt(TITLE, &mut self.rng);
        surface.put_str(left, 1, &title, Rgba::WHITE);
        surface.put_str(left, 2, PROMPT, DIM);

        let top = 4u16;
        let blink_on = now.as_millis() / 500 % 2 == 0;
        for (i, line) in self.reveal.revealed().iter().enumerate() {
            let y = top.saturating_add(i as u16);
            if y >= height {
                break;
            }
            // Horizontal gradient sweep across each line's full width.
            let total = self.reveal.lines()[i].chars().count().max(1);
            for (ci, ch) in line.chars().enumerate() {
                let tint = self.gradient.sample(ci as f32 / total as f32);
                surface.put(left + ci as u16, y, ch, tint);
            }
            if i == self.reveal.current_line() && !self.reveal.is_complete() && blink_on {
                surface.put(
                    left + line.chars().count() as u16,
                    y,
                    CursorStyle::Block.glyph(),
                    PURPLE,
                );
            }
        }
    }
}
