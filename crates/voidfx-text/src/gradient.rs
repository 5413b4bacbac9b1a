#![forbid(unsafe_code)]

//! Multi-stop color gradients for tinted text.

use voidfx_core::Rgba;

/// A color gradient defined by sorted position/color stops.
#[derive(Debug, Clone)]
pub struct ColorGradient {
    stops: Vec<(f32, Rgba)>,
}

impl ColorGradient {
    /// Create a gradient from `(position, color)` stops; positions are
    /// clamped to `[0.0, 1.0]` and sorted.
    pub fn new(stops: Vec<(f32, Rgba)>) -> Self {
        let mut stops: Vec<(f32, Rgba)> = stops
            .into_iter()
            .map(|(p, c)| (p.clamp(0.0, 1.0), c))
            .collect();
        stops.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        Self { stops }
    }

    /// The signature glow: purple → cyan → purple, the tint the about text
    /// sweeps across each line.
    pub fn void() -> Self {
        Self::new(vec![
            (0.0, Rgba::rgb(192, 132, 252)),
            (0.5, Rgba::rgb(103, 232, 249)),
            (1.0, Rgba::rgb(192, 132, 252)),
        ])
    }

    /// Sample the gradient at `t` in `[0.0, 1.0]`.
    pub fn sample(&self, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let Some(&first) = self.stops.first() else {
            return Rgba::WHITE;
        };
        if t <= first.0 {
            return first.1;
        }
        for pair in self.stops.windows(2) {
            let (p0, c0) = pair[0];
            let (p1, c1) = pair[1];
            if t <= p1 {
                let span = p1 - p0;
                let local = if span > 0.0 { (t - p0) / span } else { 1.0 };
                return c0.lerp(c1, local);
            }
        }
        self.stops.last().map(|&(_, c)| c).unwrap_or(Rgba::WHITE)
    }
}
