#![forbid(unsafe_code)]

//! Landing scene: glyph rain behind a typewriter intro.

use std::time::Duration;

use voidfx_core::{AnimationClock, FrameThrottle, Lcg64, Rect, Rgba, Surface};
use voidfx_rain::{Charset, GridConfig, RainGrid, RainPalette};
use voidfx_term::{Scene, TermSurface};
use voidfx_text::{CursorStyle, Glitch, StringReveal};

const HEADLINE: &str = "EXPLOIT COMPLEXITY.";
const BADGE: &str = "[ SYSTEM ONLINE ]";
const INTRO: &str = "> OSCP owned. Sharing malware evasion techniques and pentest knowledge.";

const PURPLE: Rgba = Rgba::rgb(168, 85, 247);
const DIM: Rgba = Rgba::rgb(113, 113, 122);

/// The landing page, terminal edition.
///
/// The rain self-throttles to 15 fps regardless of the runner's tick rate;
/// the intro reveals one character per 50 ms. Overlay text is redrawn every
/// tick so the rain's trail fade never eats it.
pub struct LandingScene {
    rng: Lcg64,
    rain: RainGrid,
    intro: StringReveal,
    glitch: Glitch,
    clock: AnimationClock,
    rain_throttle: FrameThrottle,
    type_throttle: FrameThrottle,
}

impl LandingScene {
    pub fn new(seed: u64) -> Self {
        let mut rng = Lcg64::new(seed);
        let config = GridConfig {
            charset: Charset::HERO,
            palette: RainPalette::hero(),
            reset_chance: 0.02,
            trail_fade: 0.08,
            ..GridConfig::default()
        };
        // Real dimensions arrive via the runner's initial resize call.
        let rain = RainGrid::new(config, 0, 0, &mut rng);
        Self {
            rng,
            rain,
            intro: StringReveal::new(INTRO),
            glitch: Glitch::new(0.12),
            clock: AnimationClock::new(),
            rain_throttle: FrameThrottle::from_fps(15),
            type_throttle: FrameThrottle::new(Duration::from_millis(50)),
        }
    }
}

impl Scene for LandingScene {
    fn tick(&mut self, surface: &mut TermSurface, now: Duration) {
        self.clock.tick();
        if self.rain_throttle.admit(now) {
            self.rain.tick(surface, &mut self.rng);
        }
        if self.type_throttle.admit(now) {
            self.intro.advance();
        }

        let (width, height) = surface.size();
        if width == 0 || height == 0 {
            return;
        }
        let cx = |text: &str| (width.saturating_sub(text.len() as u16)) / 2;
        let mid = height / 2;

        surface.put_str(cx(BADGE), mid.saturating_sub(3), BADGE, DIM);
        let headline = self.glitch.corrupt(HEADLINE, &mut self.rng);
        surface.put_str(cx(HEADLINE), mid.saturating_sub(1), &headline, Rgba::WHITE);

        // One blink cycle per second.
        let blink_on = self.clock.phase(1.0) < 0.5;
        let cursor = blink_on.then_some((CursorStyle::Block, PURPLE));
        let intro_x = cx(INTRO);
        let intro_area = Rect::new(intro_x, mid + 2, width.saturating_sub(intro_x), 1);
        self.intro.render(intro_area, surface, PURPLE, cursor);
        if !blink_on && !self.intro.is_complete() {
            // Blank the cursor cell on the off-phase so it actually blinks
            // instead of lingering until the trail fade catches it.
            surface.put(
                intro_x + self.intro.visible().len() as u16,
                mid + 2,
                ' ',
                Rgba::BLACK,
            );
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.rain.resize(width, height, &mut self.rng);
    }
}
