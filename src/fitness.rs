//! # Fitness Boundary
//!
//! Clients supply a [`FitnessFunction`] that scores a chromosome, and may
//! supply a [`FitnessTransform`] that rewrites the raw score before the
//! selection operators see it, for example inverting scores to turn a
//! minimization problem into the maximization form the engine works in.
//!
//! Both traits require `Send + Sync` so populations can be evaluated in
//! parallel.
//!
//! ## Example
//!
//! ```rust
//! use allele::chromosome::Chromosome;
//! use allele::fitness::FitnessFunction;
//! use allele::gene::BoolGene;
//!
//! struct OnesCount;
//!
//! impl FitnessFunction<BoolGene> for OnesCount {
//!     fn evaluate(&self, chromosome: &Chromosome<BoolGene>) -> f64 {
//!         chromosome.genes().iter().filter(|g| g.value()).count() as f64
//!     }
//! }
//! ```

use crate::chromosome::Chromosome;
use crate::gene::Gene;

/// Scores a chromosome.
///
/// The engine maximizes fitness, and its weighted-sampling selection
/// strategies require every (possibly transformed) score to be non-negative
/// and finite; violating that is treated as a fatal defect of the fitness
/// function, not a recoverable condition.
pub trait FitnessFunction<G: Gene>: Send + Sync {
    fn evaluate(&self, chromosome: &Chromosome<G>) -> f64;
}

/// Optionally rewrites a raw fitness score before selection sees it.
///
/// The chromosome is available so transforms can incorporate derived state
/// such as age.
pub trait FitnessTransform<G: Gene>: Send + Sync {
    fn transform(&self, chromosome: &Chromosome<G>, raw: f64) -> f64;
}

/// Turns a minimization score into the maximization form the engine expects,
/// by computing `max(offset - raw, 0)`.
///
/// `offset` should be an upper bound on the raw scores; anything at or above
/// it maps to zero.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct Minimize {
    offset: f64,
}

impl Minimize {
    pub fn new(offset: f64) -> Self {
        Self { offset }
    }
}

impl<G: Gene> FitnessTransform<G> for Minimize {
    fn transform(&self, _chromosome: &Chromosome<G>, raw: f64) -> f64 {
        (self.offset - raw).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gene::IntGene;

    #[test]
    fn test_minimize_inverts_and_clamps() {
        let chromosome =
            Chromosome::from_genes(vec![IntGene::new(0, 0, 9).unwrap()], false, true);
        let transform = Minimize::new(100.0);

        assert_eq!(
            FitnessTransform::<IntGene>::transform(&transform, &chromosome, 30.0),
            70.0
        );
        assert_eq!(
            FitnessTransform::<IntGene>::transform(&transform, &chromosome, 250.0),
            0.0
        );
    }
}
