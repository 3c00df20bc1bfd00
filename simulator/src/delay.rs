use std::time::Duration;

use rand::Rng;

/// Delay bounds for one role, in milliseconds. The upper bound is
/// exclusive; an empty range degenerates to a constant `min_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    pub fn sample(&self, rng: &mut impl Rng) -> Duration {
        Duration::from_millis(random_between(rng, self.min_ms, self.max_ms))
    }
}

/// Draws a value in `[min, max)`, or exactly `min` when `max <= min`.
pub fn random_between(rng: &mut impl Rng, min: u64, max: u64) -> u64 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}
