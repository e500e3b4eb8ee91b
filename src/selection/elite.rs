//! Elite selection: the top-K chromosomes survive into the next generation
//! unchanged.

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::gene::Gene;
use crate::population::Population;

/// Selects the `count` best chromosomes of a descending-sorted population.
///
/// Unlike the parent-selection strategies, elitism clones a fixed-size slice
/// of survivors wholesale, so this type exposes
/// [`EliteSelection::select_many`] instead of implementing
/// [`SelectionOperator`](crate::selection::SelectionOperator).
///
/// # Examples
///
/// ```rust
/// use allele::selection::EliteSelection;
///
/// let elite = EliteSelection::new(2).unwrap();
/// assert_eq!(elite.count(), 2);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct EliteSelection {
    count: usize,
}

impl EliteSelection {
    /// Creates an elite selection carrying over the best `count` chromosomes.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` error if `count` is zero.
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(GeneticError::Configuration(
                "Elite count must be at least 1".to_string(),
            ));
        }
        Ok(Self { count })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Clones the top `count` chromosomes of the population.
    ///
    /// The clones keep their fitness; the engine increments their age and
    /// inserts them into the next generation without re-scoring.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::InvalidState` error if the population is not
    /// sorted, or a `GeneticError::Selection` error if it holds fewer than
    /// `count` chromosomes.
    pub fn select_many<G: Gene>(&self, population: &Population<G>) -> Result<Vec<Chromosome<G>>> {
        if !population.is_sorted() {
            return Err(GeneticError::InvalidState(
                "Elite selection requires a population sorted by fitness".to_string(),
            ));
        }
        if population.len() < self.count {
            return Err(GeneticError::Selection(format!(
                "Cannot select {} elites from a population of {}",
                self.count,
                population.len()
            )));
        }

        Ok(population.iter().take(self.count).cloned().collect())
    }
}
