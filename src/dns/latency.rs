//! Synthetic per-stage latency.
//!
//! The engine asks a `LatencySource` for one value per timed stage. Production
//! code draws uniformly from the stage's range; tests can plug in a closure to
//! get exact values.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use super::stage::Stage;

/// Produces the synthetic latency (ms) recorded for a timed stage.
///
/// Only called for stages whose `latency_range()` is `Some`.
pub trait LatencySource {
    fn sample(&mut self, stage: Stage) -> u32;
}

impl<F> LatencySource for F
where
    F: FnMut(Stage) -> u32,
{
    fn sample(&mut self, stage: Stage) -> u32 {
        self(stage)
    }
}

/// Uniform draw from each stage's inclusive latency range.
#[derive(Debug, Clone)]
pub struct RandomLatency<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomLatency<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomLatency<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomLatency<StdRng> {
    /// Reproducible latencies: the same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Non-reproducible, but `Send`, unlike the thread-local generator.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: Rng> LatencySource for RandomLatency<R> {
    fn sample(&mut self, stage: Stage) -> u32 {
        match stage.latency_range() {
            Some(range) => self.rng.random_range(range),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_random_latency_within_stage_ranges() {
        let mut source = RandomLatency::new();
        for _ in 0..200 {
            for stage in Stage::iter() {
                let latency = source.sample(stage);
                match stage.latency_range() {
                    Some(range) => assert!(
                        range.contains(&latency),
                        "{stage} latency {latency} outside {range:?}"
                    ),
                    None => assert_eq!(latency, 0),
                }
            }
        }
    }

    #[test]
    fn test_seeded_latency_is_reproducible() {
        let mut a = RandomLatency::seeded(42);
        let mut b = RandomLatency::seeded(42);
        let first: Vec<u32> = Stage::iter().map(|s| a.sample(s)).collect();
        let second: Vec<u32> = Stage::iter().map(|s| b.sample(s)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_closure_source() {
        let mut source = |stage: Stage| u32::from(stage.progress_percent());
        assert_eq!(source.sample(Stage::RootServer), 55);
    }
}
