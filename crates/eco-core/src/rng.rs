//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! A single `SmallRng` seeded from the configured `u64` drives every random
//! decision in a run: initial seeding, random ages, neighbour shuffles, and
//! breeding draws.  The simulation is single-threaded and agents act in a
//! fixed order, so the same seed always replays the same draw sequence and
//! therefore the same run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG shared by the field and all behaviors.
///
/// Passed explicitly (`&mut SimRng`) to every operation that draws, rather
/// than held in process-wide state, so tests can inject a seeded generator.
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
    ///
    /// # Panics
    /// Panics if `range` is empty.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Draw a uniform `f64` in `[0, 1)` and report whether it is `<= p`.
    ///
    /// Always consumes exactly one draw, even for `p == 0` or `p == 1`.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.random::<f64>() <= p
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
