//! Truncation selection: parents are drawn uniformly from the best slice of
//! the population.

use crate::chromosome::Chromosome;
use crate::engine::status::StatusInfo;
use crate::error::{GeneticError, Result};
use crate::gene::Gene;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionOperator;

/// Restricts the candidate pool to the best `sub_size` chromosomes of a
/// sorted population, then draws each parent independently and uniformly
/// from that pool. The same chromosome may be drawn twice.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct TruncationSelection {
    sub_size: usize,
}

impl TruncationSelection {
    /// Creates a truncation selection over the best `sub_size` chromosomes.
    ///
    /// When the population is smaller than `sub_size`, the whole population
    /// is the pool.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` error if `sub_size` is zero.
    pub fn new(sub_size: usize) -> Result<Self> {
        if sub_size == 0 {
            return Err(GeneticError::Configuration(
                "Truncation sub-size must be at least 1".to_string(),
            ));
        }
        Ok(Self { sub_size })
    }
}

impl<G: Gene> SelectionOperator<G> for TruncationSelection {
    fn needs_sorted(&self) -> bool {
        true
    }

    fn prepare(
        &mut self,
        _status: &StatusInfo,
        population: &Population<G>,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        if !population.is_sorted() {
            return Err(GeneticError::InvalidState(
                "Truncation selection requires a population sorted by fitness".to_string(),
            ));
        }
        Ok(())
    }

    fn select_pair(
        &self,
        population: &Population<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome<G>, Chromosome<G>)> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        if !population.is_sorted() {
            return Err(GeneticError::InvalidState(
                "Truncation selection requires a population sorted by fitness".to_string(),
            ));
        }

        let pool = self.sub_size.min(population.len());
        let first = population[rng.index(pool)].clone();
        let second = population[rng.index(pool)].clone();
        Ok((first, second))
    }
}
