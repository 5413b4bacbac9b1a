#![forbid(unsafe_code)]

//! Streams scene: horizontal binary noise.

use std::time::Duration;

use voidfx_core::Lcg64;
use voidfx_rain::{StreamConfig, StreamField};
use voidfx_term::{Scene, TermSurface};

/// Drifting binary data streams across the whole surface. Runs at the
/// runner's full tick rate; each stream keeps its speed, row, text, and
/// opacity for the lifetime of the surface size.
pub struct StreamsScene {
    rng: Lcg64,
    field: StreamField,
}

impl StreamsScene {
    pub fn new(seed: u64) -> Self {
        let mut rng = Lcg64::new(seed);
        let field = StreamField::new(StreamConfig::default(), 0, 0, &mut rng);
        Self { rng, field }
    }
}

impl Scene for StreamsScene {
    fn tick(&mut self, surface: &mut TermSurface, _now: Duration) {
        self.field.tick(surface);
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.field.resize(width, height, &mut self.rng);
    }
}
