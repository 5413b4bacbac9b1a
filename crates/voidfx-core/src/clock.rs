#![forbid(unsafe_code)]

//! Animation time and frame pacing.
//!
//! Two suspension mechanisms drive the engines: a fixed-rate timer that
//! fires one tick per interval, and a continuous redraw callback that must
//! self-throttle to a target rate. [`AnimationClock`] covers the first,
//! [`FrameThrottle`] the second. Both accept explicit timestamps so tests
//! can simulate a clock.

use std::time::{Duration, Instant};

/// Accumulated animation time with a speed multiplier.
///
/// Tracks seconds of effect time, scaled by `speed` (1.0 = normal,
/// 0.0 = paused). Call [`tick`](AnimationClock::tick) once per frame for
/// wall-clock driving, or [`tick_delta`](AnimationClock::tick_delta) with an
/// explicit step for deterministic tests.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    time: f64,
    speed: f64,
    last_tick: Instant,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationClock {
    /// Create a clock starting at time 0.
    pub fn new() -> Self {
        Self {
            time: 0.0,
            speed: 1.0,
            last_tick: Instant::now(),
        }
    }

    /// Advance by elapsed real time since the last tick.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f64();
        self.time += delta * self.speed;
        self.last_tick = now;
    }

    /// Advance by a specific delta. Use this when the caller owns the clock.
    pub fn tick_delta(&mut self, delta_seconds: f64) {
        self.time += delta_seconds * self.speed;
        self.last_tick = Instant::now();
    }

    /// Current animation time in seconds.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Set the speed multiplier (clamped to non-negative).
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.max(0.0);
    }

    /// Pause the clock (`set_speed(0.0)`).
    pub fn pause(&mut self) {
        self.speed = 0.0;
    }

    /// Resume at normal speed.
    pub fn resume(&mut self) {
        self.speed = 1.0;
    }

    /// Cyclic phase in `0.0..1.0` at the given frequency.
    #[inline]
    pub fn phase(&self, cycles_per_second: f64) -> f64 {
        if cycles_per_second <= 0.0 {
            return 0.0;
        }
        (self.time * cycles_per_second).fract()
    }
}

/// Per-frame self-throttle.
///
/// A redraw callback may arrive at any refresh rate; the throttle admits at
/// most one frame per target interval and rejects the rest, so an effect
/// never runs faster than intended on a high-refresh display.
///
/// The admit step carries the division remainder forward
/// (`last = now - elapsed % target`), so the long-term admitted rate matches
/// the target instead of drifting by up to one frame per interval.
///
/// Timestamps are durations since an epoch the caller picks (session start);
/// they must be monotonically non-decreasing.
#[derive(Debug, Clone)]
pub struct FrameThrottle {
    target: Duration,
    last: Duration,
}

impl FrameThrottle {
    /// Create a throttle admitting one frame per `target` interval.
    pub fn new(target: Duration) -> Self {
        Self {
            target,
            last: Duration::ZERO,
        }
    }

    /// Create a throttle from a frames-per-second target.
    pub fn from_fps(fps: u32) -> Self {
        let fps = fps.max(1);
        Self::new(Duration::from_secs_f64(1.0 / fps as f64))
    }

    /// The target interval.
    #[inline]
    pub fn target(&self) -> Duration {
        self.target
    }

    /// Offer a frame at `now`. Returns true if the frame is admitted;
    /// a rejected frame must mutate nothing and draw nothing.
    pub fn admit(&mut self, now: Duration) -> bool {
        let elapsed = now.saturating_sub(self.last);
        if elapsed < self.target {
            return false;
        }
        // Carry the remainder so admitted frames track the target rate.
        let rem_nanos = elapsed.as_nanos() % self.target.as_nanos().max(1);
        self.last = now.saturating_sub(Duration::from_nanos(rem_nanos as u64));
        true
    }

    /// Reset so the next interval is measured from `now`.
    pub fn reset(&mut self, now: Duration) {
        self.last = now;
    }
}
