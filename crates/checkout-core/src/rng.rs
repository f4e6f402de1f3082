//! Deterministic simulation-level RNG wrapper.
//!
//! Every random draw in a run (basket sizes, arrival batch sizes) comes from
//! a `SimRng` seeded from `CheckoutConfig::seed`, so the same seed always
//! produces the same customer stream.  Components that draw independently
//! get their own child RNG via [`SimRng::child`] so adding draws in one
//! place does not shift the sequence seen by another.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts.  If parallel intake is ever added,
/// give each arrival source its own child `SimRng`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
