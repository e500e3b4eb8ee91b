//! Tournament selection: each parent is the probabilistic winner of a small
//! uniformly drawn contest.

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::gene::Gene;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionOperator;

/// Runs one tournament per parent.
///
/// A tournament draws `tournament_size` chromosomes uniformly with
/// replacement and sorts them descending by fitness. The sorted sample is
/// then walked with a geometric-decay acceptance rule: entry `k` wins if the
/// cumulative probability `p + p(1-p) + ... + p(1-p)^k` exceeds one fresh
/// uniform draw, and the last entry wins by default. With `probability` at
/// 1.0 this is the classic deterministic tournament.
///
/// - Smaller tournaments keep selection close to uniform (more exploration)
/// - Larger tournaments focus on the best individuals (more exploitation)
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct TournamentSelection {
    tournament_size: usize,
    probability: f64,
}

impl TournamentSelection {
    /// Creates a tournament selection.
    ///
    /// # Arguments
    ///
    /// * `tournament_size` - Contestants per tournament, at least 1. A size
    ///   of 1 is equivalent to uniform random selection.
    /// * `probability` - Acceptance probability of the best contestant, in
    ///   `(0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` error if `tournament_size`
    /// is zero or `probability` lies outside `(0, 1]`.
    pub fn new(tournament_size: usize, probability: f64) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        if !(probability > 0.0 && probability <= 1.0) {
            return Err(GeneticError::Configuration(
                "Tournament probability must be in the range (0.0, 1.0]".to_string(),
            ));
        }
        Ok(Self {
            tournament_size,
            probability,
        })
    }

    fn run_tournament<G: Gene>(
        &self,
        population: &Population<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        let mut contestants: Vec<usize> = (0..self.tournament_size)
            .map(|_| rng.index(population.len()))
            .collect();
        contestants.sort_by(|&a, &b| {
            let fa = population[a].fitness().unwrap_or(f64::NEG_INFINITY);
            let fb = population[b].fitness().unwrap_or(f64::NEG_INFINITY);
            fb.partial_cmp(&fa).unwrap_or(std::cmp::Ordering::Equal)
        });

        let draw = rng.random();
        let mut cumulative = 0.0;
        let mut decay = 1.0;
        for (rank, &index) in contestants.iter().enumerate() {
            cumulative += self.probability * decay;
            if cumulative > draw || rank == contestants.len() - 1 {
                return Ok(index);
            }
            decay *= 1.0 - self.probability;
        }
        unreachable!("tournament walk always returns on the last contestant")
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        // Binary deterministic tournament; the values satisfy new()
        Self {
            tournament_size: 2,
            probability: 1.0,
        }
    }
}

impl<G: Gene> SelectionOperator<G> for TournamentSelection {
    fn select_pair(
        &self,
        population: &Population<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome<G>, Chromosome<G>)> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        if !population.is_evaluated() {
            return Err(GeneticError::InvalidState(
                "Tournament selection requires an evaluated population".to_string(),
            ));
        }

        let first = population[self.run_tournament(population, rng)?].clone();
        let second = population[self.run_tournament(population, rng)?].clone();
        Ok((first, second))
    }
}
