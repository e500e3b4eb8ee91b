//! Linear rank selection: selection probability is assigned by sorted
//! position rather than raw fitness magnitude.

use crate::chromosome::Chromosome;
use crate::engine::status::StatusInfo;
use crate::error::{GeneticError, Result};
use crate::gene::Gene;
use crate::math::AliasSampler;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionOperator;

/// Linear ranking over a descending-sorted population.
///
/// With `pos` running from 0 for the worst chromosome to `N-1` for the best,
/// each rank receives the weight
///
/// ```text
/// 2 - SP + 2 * (SP - 1) * pos / (N - 1)
/// ```
///
/// where the selective pressure `SP` lies in `[1, 2]`. At `SP = 1` all ranks
/// weigh the same; at `SP = 2` the worst rank weighs zero and the best
/// weighs two. An alias table over the rank weights makes each draw O(1).
///
/// Rank selection decouples selection pressure from the fitness scale, which
/// prevents a few outlier scores from collapsing diversity early.
#[derive(Debug)]
pub struct LinearRankSelection {
    selection_pressure: f64,
    sampler: Option<AliasSampler>,
}

impl LinearRankSelection {
    /// Creates a linear rank selection with the given selective pressure.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` error if
    /// `selection_pressure` is outside `[1.0, 2.0]`.
    pub fn new(selection_pressure: f64) -> Result<Self> {
        if !(1.0..=2.0).contains(&selection_pressure) {
            return Err(GeneticError::Configuration(
                "Linear rank selection pressure must be in the range [1.0, 2.0]".to_string(),
            ));
        }
        Ok(Self {
            selection_pressure,
            sampler: None,
        })
    }

    /// Rank weights indexed by sorted position (0 = best), for a population
    /// of `n`.
    pub(crate) fn rank_weights(selection_pressure: f64, n: usize) -> Vec<f64> {
        if n == 1 {
            return vec![1.0];
        }
        (0..n)
            .map(|index| {
                let pos = (n - 1 - index) as f64;
                2.0 - selection_pressure
                    + 2.0 * (selection_pressure - 1.0) * pos / (n as f64 - 1.0)
            })
            .collect()
    }
}

impl<G: Gene> SelectionOperator<G> for LinearRankSelection {
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
                "Rank selection requires a population sorted by fitness".to_string(),
            ));
        }
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let weights = Self::rank_weights(self.selection_pressure, population.len());
        self.sampler = Some(AliasSampler::new(&weights)?);
        Ok(())
    }

    fn select_pair(
        &self,
        population: &Population<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome<G>, Chromosome<G>)> {
        let sampler = self.sampler.as_ref().ok_or_else(|| {
            GeneticError::InvalidState(
                "Rank selection was not prepared for this population".to_string(),
            )
        })?;
        if sampler.len() != population.len() {
            return Err(GeneticError::InvalidState(
                "Rank table is stale for this population".to_string(),
            ));
        }

        let first = population[sampler.sample(rng)].clone();
        let second = population[sampler.sample(rng)].clone();
        Ok((first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pressure_rejected() {
        assert!(matches!(
            LinearRankSelection::new(0.5),
            Err(GeneticError::Configuration(_))
        ));
        assert!(matches!(
            LinearRankSelection::new(2.5),
            Err(GeneticError::Configuration(_))
        ));
    }

    #[test]
    fn test_rank_weights_are_arithmetic_progression() {
        // N = 11, SP = 2.0 gives weights 2.0, 1.8, ..., 0.0 from best to worst
        let weights = LinearRankSelection::rank_weights(2.0, 11);
        for (index, &weight) in weights.iter().enumerate() {
            let expected = 0.2 * (10 - index) as f64;
            assert!(
                (weight - expected).abs() < 1e-12,
                "index {}: weight {} expected {}",
                index,
                weight,
                expected
            );
        }
    }

    #[test]
    fn test_pressure_one_is_uniform() {
        let weights = LinearRankSelection::rank_weights(1.0, 7);
        assert!(weights.iter().all(|&w| (w - 1.0).abs() < 1e-12));
    }

    #[test]
    fn test_singleton_population_weight() {
        assert_eq!(LinearRankSelection::rank_weights(1.7, 1), vec![1.0]);
    }
}
