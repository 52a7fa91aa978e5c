//! Deterministic simulation RNG wrapper.
//!
//! # Determinism strategy
//!
//! A model run owns exactly one `SimRng`, seeded once when the simulation is
//! built and threaded explicitly through every consumer:
//!
//! 1. agent attribute sampling (radius, velocity),
//! 2. initial placement,
//! 3. friend-group partitioning,
//! 4. the activation order at the start of every tick.
//!
//! Nothing reads global random state, so the same seed always replays the
//! same run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The single random source of a simulation run.
///
/// Used only from the single-threaded tick loop and the builder.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
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

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Draw `amount` distinct indices from `0..length`, in sampling order.
    ///
    /// # Panics
    /// Panics if `amount > length`.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, length, amount).into_vec()
    }
}
