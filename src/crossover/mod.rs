//! # Crossover Operators
//!
//! Crossover operators recombine two parent chromosomes in place: both
//! arguments leave the call with new gene content, age reset to zero and
//! fitness cleared.
//!
//! All operators require parents of equal gene count. The point-based and
//! uniform variants additionally require fixed-length, non-permutation
//! parents, because swapping arbitrary positions between two permutations
//! would duplicate and drop symbols. Permutation chromosomes are served by
//! [`OrderedCrossover`] (OX) and [`PartiallyMappedCrossover`] (PMX), which
//! preserve each parent's value multiset exactly.

pub mod half_uniform;
pub mod ordered;
pub mod pmx;
pub mod single_point;
pub mod two_point;
pub mod uniform;

use std::fmt::Debug;

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::gene::Gene;
use crate::rng::RandomNumberGenerator;

/// Trait for crossover strategies.
pub trait CrossoverOperator<G>: Debug + Send
where
    G: Gene,
{
    /// Recombines two parents in place.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Crossover` error if the parents have
    /// different gene counts or violate the operator's structural
    /// preconditions.
    fn cross(
        &self,
        first: &mut Chromosome<G>,
        second: &mut Chromosome<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()>;
}

/// Validates the preconditions shared by every crossover operator.
pub(crate) fn check_parents<G: Gene>(
    first: &Chromosome<G>,
    second: &Chromosome<G>,
) -> Result<()> {
    if first.len() != second.len() {
        return Err(GeneticError::Crossover(format!(
            "Parent gene counts differ: {} vs {}",
            first.len(),
            second.len()
        )));
    }
    if first.is_empty() {
        return Err(GeneticError::Crossover(
            "Cannot recombine empty chromosomes".to_string(),
        ));
    }
    Ok(())
}

/// Validates the preconditions of the order-breaking (non-permutation)
/// operators.
pub(crate) fn check_order_breaking<G: Gene>(
    first: &Chromosome<G>,
    second: &Chromosome<G>,
) -> Result<()> {
    check_parents(first, second)?;
    if first.is_permutation() || second.is_permutation() {
        return Err(GeneticError::Crossover(
            "Order-breaking crossover cannot be applied to permutation chromosomes".to_string(),
        ));
    }
    if !first.is_fixed_length() || !second.is_fixed_length() {
        return Err(GeneticError::Crossover(
            "Order-breaking crossover requires fixed-length chromosomes".to_string(),
        ));
    }
    Ok(())
}

/// Validates the preconditions of the permutation-preserving operators.
pub(crate) fn check_permutation<G: Gene>(
    first: &Chromosome<G>,
    second: &Chromosome<G>,
) -> Result<()> {
    check_parents(first, second)?;
    if !first.is_permutation() || !second.is_permutation() {
        return Err(GeneticError::Crossover(
            "Permutation crossover requires permutation chromosomes".to_string(),
        ));
    }
    Ok(())
}

/// Draws a random `(start, end)` sub-range with `start <= end`, both ends
/// uniform over the index range.
pub(crate) fn random_span(len: usize, rng: &mut RandomNumberGenerator) -> (usize, usize) {
    let a = rng.index(len);
    let b = rng.index(len);
    (a.min(b), a.max(b))
}

pub use half_uniform::HalfUniformCrossover;
pub use ordered::OrderedCrossover;
pub use pmx::PartiallyMappedCrossover;
pub use single_point::SinglePointCrossover;
pub use two_point::TwoPointCrossover;
pub use uniform::UniformCrossover;
