//! # AliasSampler
//!
//! Vose's alias method: given `n` non-negative weights, an O(n) build
//! produces a table from which weighted draws cost O(1) each.
//!
//! The table is a pure function of its weight array. It is not incrementally
//! updatable; whenever the weights change (e.g. each time a new generation's
//! fitness values are known), a fresh sampler must be built.
//!
//! ## Example
//!
//! ```rust
//! use allele::math::AliasSampler;
//! use allele::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let sampler = AliasSampler::new(&[1.0, 2.0, 7.0]).unwrap();
//! let index = sampler.sample(&mut rng);
//! assert!(index < 3);
//! ```

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// An O(1)-amortized discrete weighted sampler.
#[derive(Clone, Debug)]
pub struct AliasSampler {
    prob: Vec<f64>,
    alias: Vec<usize>,
}

impl AliasSampler {
    /// Builds the sampler from a weight array, computing the normalizing sum.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Selection` error if the array is empty,
    /// contains a negative or non-finite weight, or sums to zero.
    pub fn new(weights: &[f64]) -> Result<Self> {
        let total = weights.iter().sum();
        Self::with_total(weights, total)
    }

    /// Builds the sampler with a caller-supplied normalizing sum.
    ///
    /// # Errors
    ///
    /// Same contract as [`AliasSampler::new`].
    pub fn with_total(weights: &[f64], total: f64) -> Result<Self> {
        if weights.is_empty() {
            return Err(GeneticError::Selection(
                "Cannot build an alias table from an empty weight array".to_string(),
            ));
        }
        if weights.iter().any(|&w| !w.is_finite() || w < 0.0) {
            return Err(GeneticError::Selection(
                "Alias sampling requires finite, non-negative weights".to_string(),
            ));
        }
        if !total.is_finite() || total <= 0.0 {
            return Err(GeneticError::Selection(format!(
                "Alias sampling requires a positive weight sum, got {}",
                total
            )));
        }

        let n = weights.len();
        let mut prob = vec![0.0; n];
        let mut alias = vec![0; n];

        // Normalize so the average weight is 1, then bucket columns into the
        // two work stacks.
        let normalized: Vec<f64> = weights.iter().map(|&w| w * n as f64 / total).collect();
        let mut small: Vec<usize> = Vec::with_capacity(n);
        let mut large: Vec<usize> = Vec::with_capacity(n);
        let mut residual = normalized;
        for (index, &weight) in residual.iter().enumerate() {
            if weight < 1.0 {
                small.push(index);
            } else {
                large.push(index);
            }
        }

        while let (Some(&small_index), Some(&large_index)) = (small.last(), large.last()) {
            small.pop();
            large.pop();
            prob[small_index] = residual[small_index];
            alias[small_index] = large_index;

            residual[large_index] -= 1.0 - residual[small_index];
            if residual[large_index] < 1.0 {
                small.push(large_index);
            } else {
                large.push(large_index);
            }
        }

        // Whichever stack drains last holds columns whose residual is 1 up
        // to rounding; their alias slot is never consulted.
        for index in large.into_iter().chain(small) {
            prob[index] = 1.0;
        }

        Ok(Self { prob, alias })
    }

    /// The number of columns in the table.
    pub fn len(&self) -> usize {
        self.prob.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prob.is_empty()
    }

    /// Draws one index with probability proportional to its weight.
    pub fn sample(&self, rng: &mut RandomNumberGenerator) -> usize {
        let column = rng.index(self.prob.len());
        if rng.random() < self.prob[column] {
            column
        } else {
            self.alias[column]
        }
    }
}
