#![forbid(unsafe_code)]

//! Weighted color-tier selection.

use voidfx_core::{RandomSource, Rgba};

/// A three-tier rain palette: a common base color, a rare accent, and a
/// rarer bright "head" flash.
///
/// Each draw rolls once and picks a tier by weight, which is what gives the
/// rain its occasional white-hot glints against the body color. Weights are
/// probabilities per glyph; anything left over goes to `base`.
#[derive(Debug, Clone, Copy)]
pub struct RainPalette {
    /// Bright flash color.
    pub head: Rgba,
    /// Probability of the head tier.
    pub head_weight: f64,
    /// Rare accent color.
    pub rare: Rgba,
    /// Probability of the rare tier.
    pub rare_weight: f64,
    /// Everything else.
    pub base: Rgba,
}

impl RainPalette {
    /// Spring-green body, violet accents, white glints.
    pub const fn matrix() -> Self {
        Self {
            head: Rgba::WHITE,
            head_weight: 0.02,
            rare: Rgba::rgb(183, 33, 255),
            rare_weight: 0.03,
            base: Rgba::rgb(0, 255, 170),
        }
    }

    /// Violet body with white glints, no middle tier.
    pub const fn hero() -> Self {
        Self {
            head: Rgba::WHITE,
            head_weight: 0.05,
            rare: Rgba::rgb(168, 85, 247),
            rare_weight: 0.0,
            base: Rgba::rgb(168, 85, 247),
        }
    }

    /// Sample one glyph color.
    pub fn sample(&self, rng: &mut dyn RandomSource) -> Rgba {
        let roll = rng.next_f64();
        if roll < self.head_weight {
            self.head
        } else if roll < self.head_weight + self.rare_weight {
            self.rare
        } else {
            self.base
        }
    }
}

impl Default for RainPalette {
    fn default() -> Self {
        Self::matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::RainPalette;
    use voidfx_core::{Lcg64, RandomSource, Rgba};

    /// Scripted rolls: drive `sample` through each tier boundary.
    struct Roll(f64);

    impl RandomSource for Roll {
        fn next_u64(&mut self) -> u64 {
            // Invert next_f64's mapping: value = f * 2^53, shifted back up.
            ((self.0 * (1u64 << 53) as f64) as u64) << 11
        }
    }

    #[test]
    fn tier_boundaries() {
        let p = RainPalette::matrix();
        assert_eq!(p.sample(&mut Roll(0.0)), p.head);
        assert_eq!(p.sample(&mut Roll(0.019)), p.head);
        assert_eq!(p.sample(&mut Roll(0.021)), p.rare);
        assert_eq!(p.sample(&mut Roll(0.049)), p.rare);
        assert_eq!(p.sample(&mut Roll(0.051)), p.base);
        assert_eq!(p.sample(&mut Roll(0.99)), p.base);
    }

    #[test]
    fn sample_only_returns_palette_colors() {
        let p = RainPalette::matrix();
        let mut rng = Lcg64::new(77);
        for _ in 0..1000 {
            let c = p.sample(&mut rng);
            assert!(c == p.head || c == p.rare || c == p.base);
        }
    }

    #[test]
    fn base_tier_dominates() {
        let p = RainPalette::matrix();
        let mut rng = Lcg64::new(3);
        let base_hits = (0..2000).filter(|_| p.sample(&mut rng) == p.base).count();
        // 95% expected; anything above 90% of 2000 draws is a sane bound.
        assert!(base_hits > 1800, "base tier hit only {base_hits}/2000");
    }

    #[test]
    fn hero_palette_has_two_effective_tiers() {
        let p = RainPalette::hero();
        assert_eq!(p.sample(&mut Roll(0.04)), Rgba::WHITE);
        assert_eq!(p.sample(&mut Roll(0.06)), p.base);
    }
}
