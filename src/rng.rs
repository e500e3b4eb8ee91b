//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct wraps the `rand` crate's `StdRng` and
//! provides the draws the engine needs: uniform floats, ranged values, index
//! picks, coin flips and in-place shuffles.
//!
//! All randomness in the engine flows through an explicitly passed
//! `&mut RandomNumberGenerator`. The engine owns a single instance and
//! threads it into every operator, so a run seeded with
//! [`RandomNumberGenerator::from_seed`] is fully reproducible.
//!
//! ## Example
//!
//! ```rust
//! use allele::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let x = rng.random();
//! assert!((0.0..1.0).contains(&x));
//! ```

use rand::seq::SliceRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides the random
/// draws used by the evolutionary engine.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    ///
    /// # Arguments
    ///
    /// * `seed` - The seed to use for the random number generator.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a uniform `f64` in `[0.0, 1.0)`.
    pub fn random(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Generates a random value in the given range.
    ///
    /// # Arguments
    ///
    /// * `range` - The range to generate a random value in.
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    /// Returns `true` with probability `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not in `[0.0, 1.0]`; callers validate probabilities
    /// at configuration time.
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }

    /// Draws a uniform index in `[0, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero; callers guard against empty ranges.
    pub fn index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Shuffles a slice in place with the Fisher-Yates algorithm.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.rng);
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
