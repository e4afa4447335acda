//! Seedable simulation RNG.
//!
//! # Determinism strategy
//!
//! A world run draws every random decision from one `SimRng`:
//!
//! - the per-tick shuffle of the critter traversal order,
//! - the left/right order tried by `reproduce`,
//! - any randomness a mind uses while deciding.
//!
//! The tick loop is single-threaded, so a single stream consumed in a fixed
//! order is enough: the same seed always replays the same run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform draw from `range`.  Minds and hosts seeding a population use
    /// this instead of a thread RNG.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Fair coin.
    #[inline]
    pub fn coin_flip(&mut self) -> bool {
        self.gen_bool(0.5)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
