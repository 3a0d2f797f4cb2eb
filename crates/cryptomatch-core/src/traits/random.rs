//! Injectable randomness.
//!
//! Everything random in the engine (category draws, the residual signal,
//! classifier confidence) goes through [`RandomSource`] so tests can pin it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of bounded uniform integers.
pub trait RandomSource {
    /// Uniform integer in `[low, high]`, both inclusive.
    /// Returns `low` when `high <= low`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;

    /// Uniform index into a collection of `len` elements. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let upper = u32::try_from(len.saturating_sub(1)).unwrap_or(u32::MAX);
        self.next_in_range(0, upper) as usize
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        (**self).next_in_range(low, high)
    }
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// OS-seeded generator.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeded when a seed is configured, OS-seeded otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Each value is clamped into the requested range. An empty sequence
/// always yields `low`.
#[derive(Debug, Clone, Default)]
pub struct FixedSequence {
    values: Vec<u32>,
    position: usize,
}

impl FixedSequence {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            position: 0,
        }
    }

    /// A sequence that returns `value` forever.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for FixedSequence {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        if self.values.is_empty() || high <= low {
            self.position += 1;
            return low;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value.clamp(low, high)
    }
}
