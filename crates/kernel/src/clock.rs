use std::time::Instant;

/// Timing for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Seconds since the previous tick. Never negative.
    pub delta: f32,
    /// Total seconds since the clock started. Monotonically increasing.
    pub elapsed: f32,
}

/// Tick source for the frame loop.
///
/// `tick` reads wall time; `tick_with` drives the same elapsed
/// accumulation from an explicit delta, which is what headless runs and
/// tests use.
#[derive(Debug)]
pub struct SimClock {
    last: Instant,
    elapsed: f32,
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SimClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            elapsed: 0.0,
        }
    }

    /// Advance from wall time. Called exactly once per frame.
    pub fn tick(&mut self) -> FrameTiming {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        self.tick_with(delta)
    }

    /// Advance with an explicit delta. Negative deltas are clamped to 0.
    pub fn tick_with(&mut self, delta: f32) -> FrameTiming {
        let delta = delta.max(0.0);
        self.elapsed += delta;
        FrameTiming {
            delta,
            elapsed: self.elapsed,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_accumulates_deltas() {
        let mut clock = SimClock::new();
        let a = clock.tick_with(0.016);
        let b = clock.tick_with(0.016);
        assert_eq!(a.delta, 0.016);
        assert!((b.elapsed - 0.032).abs() < 1e-6);
        assert!(b.elapsed > a.elapsed);
    }

    #[test]
    fn negative_delta_is_clamped() {
        let mut clock = SimClock::new();
        let t = clock.tick_with(-1.0);
        assert_eq!(t.delta, 0.0);
        assert_eq!(t.elapsed, 0.0);
    }

    #[test]
    fn wall_clock_is_monotonic() {
        let mut clock = SimClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert!(a.delta >= 0.0);
        assert!(b.elapsed >= a.elapsed);
    }
}
