//! Nonlinear rank selection: rank weights follow a geometric progression
//! whose base is the positive root of a selective-pressure polynomial.

use tracing::trace;

use crate::chromosome::Chromosome;
use crate::engine::status::StatusInfo;
use crate::error::{GeneticError, Result};
use crate::gene::Gene;
use crate::math::{AliasSampler, Polynomial};
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionOperator;

const ROOT_TOLERANCE: f64 = 1e-10;
const ROOT_MAX_ITERATIONS: usize = 200;

/// Cached per-population-size state: the polynomial root and the alias table
/// over the derived rank weights.
#[derive(Debug)]
struct RankTable {
    population_size: usize,
    root: f64,
    sampler: AliasSampler,
}

/// Nonlinear ranking over a descending-sorted population.
///
/// For a population of `N` and selective pressure `SP` in `[1, N-2]`, the
/// weight of rank `pos` (0 = worst) is
///
/// ```text
/// N * x^pos / (x^0 + x^1 + ... + x^(N-1))
/// ```
///
/// where `x` is the positive real root of
///
/// ```text
/// (SP - N) * x^(N-1) + SP * x^(N-2) + ... + SP
/// ```
///
/// Nonlinear ranking permits far higher pressure on the best ranks than the
/// linear scheme. The root and the alias table are cached and recomputed
/// only when the population size changes; failure to locate the root is a
/// fatal `GeneticError::NonConvergence` (no fallback to linear ranking).
#[derive(Debug)]
pub struct NonLinearRankSelection {
    selection_pressure: f64,
    table: Option<RankTable>,
}

impl NonLinearRankSelection {
    /// Creates a nonlinear rank selection with the given selective pressure.
    ///
    /// The upper bound of the valid pressure range depends on the population
    /// size, so it is validated in [`SelectionOperator::prepare`].
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` error if
    /// `selection_pressure` is below 1.
    pub fn new(selection_pressure: f64) -> Result<Self> {
        if !selection_pressure.is_finite() || selection_pressure < 1.0 {
            return Err(GeneticError::Configuration(
                "Nonlinear rank selection pressure must be at least 1.0".to_string(),
            ));
        }
        Ok(Self {
            selection_pressure,
            table: None,
        })
    }

    fn build_table(&self, n: usize) -> Result<RankTable> {
        if self.selection_pressure > (n as f64) - 2.0 {
            return Err(GeneticError::Configuration(format!(
                "Nonlinear rank selection pressure {} exceeds the population-size limit {}",
                self.selection_pressure,
                n - 2
            )));
        }

        // (SP - N) x^(N-1) + SP x^(N-2) + ... + SP, ascending coefficients
        let mut coefficients = vec![self.selection_pressure; n - 1];
        coefficients.push(self.selection_pressure - n as f64);
        let root = Polynomial::new(coefficients)?
            .positive_root(ROOT_TOLERANCE, ROOT_MAX_ITERATIONS)?;
        trace!(population_size = n, root, "nonlinear rank root computed");

        // Powers of the root by ascending rank, normalized so the weights
        // sum to N.
        let mut powers = Vec::with_capacity(n);
        let mut power = 1.0;
        for _ in 0..n {
            powers.push(power);
            power *= root;
        }
        let sum: f64 = powers.iter().sum();
        // Index 0 is the best chromosome in a descending-sorted population,
        // so it takes the highest rank's weight.
        let weights: Vec<f64> = (0..n)
            .map(|index| n as f64 * powers[n - 1 - index] / sum)
            .collect();

        Ok(RankTable {
            population_size: n,
            root,
            sampler: AliasSampler::new(&weights)?,
        })
    }

    /// The cached polynomial root, if a table has been built.
    pub fn root(&self) -> Option<f64> {
        self.table.as_ref().map(|t| t.root)
    }
}

impl<G: Gene> SelectionOperator<G> for NonLinearRankSelection {
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
        if population.len() < 3 {
            return Err(GeneticError::Configuration(
                "Nonlinear rank selection requires a population of at least 3".to_string(),
            ));
        }

        let stale = self
            .table
            .as_ref()
            .map_or(true, |t| t.population_size != population.len());
        if stale {
            self.table = Some(self.build_table(population.len())?);
        }
        Ok(())
    }

    fn select_pair(
        &self,
        population: &Population<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome<G>, Chromosome<G>)> {
        let table = self.table.as_ref().ok_or_else(|| {
            GeneticError::InvalidState(
                "Rank selection was not prepared for this population".to_string(),
            )
        })?;
        if table.population_size != population.len() {
            return Err(GeneticError::InvalidState(
                "Rank table is stale for this population".to_string(),
            ));
        }

        let first = population[table.sampler.sample(rng)].clone();
        let second = population[table.sampler.sample(rng)].clone();
        Ok((first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressure_below_one_rejected() {
        assert!(matches!(
            NonLinearRankSelection::new(0.9),
            Err(GeneticError::Configuration(_))
        ));
    }

    #[test]
    fn test_root_for_reference_parameters() {
        // N = 11, SP = 3.0 has the documented root ~1.357333
        let selection = NonLinearRankSelection::new(3.0).unwrap();
        let table = selection.build_table(11).unwrap();
        assert!((table.root - 1.357333).abs() < 1e-5);
    }

    #[test]
    fn test_pressure_exceeding_size_limit_rejected() {
        let selection = NonLinearRankSelection::new(9.5).unwrap();
        // For n = 11 the limit is n - 2 = 9
        assert!(matches!(
            selection.build_table(11),
            Err(GeneticError::Configuration(_))
        ));
    }

    #[test]
    fn test_weights_sum_to_population_size() {
        let selection = NonLinearRankSelection::new(2.0).unwrap();
        let table = selection.build_table(8).unwrap();
        assert_eq!(table.population_size, 8);
        assert_eq!(table.sampler.len(), 8);
    }
}
