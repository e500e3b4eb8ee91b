//! Stochastic universal sampling: evenly spaced pointers over the
//! cumulative fitness wheel.

use crate::chromosome::Chromosome;
use crate::engine::status::StatusInfo;
use crate::error::{GeneticError, Result};
use crate::gene::Gene;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionOperator;

/// Lays `selection_size` pointers with spacing `total_fitness /
/// selection_size` and a random phase offset over the cumulative fitness of
/// the population, then maps each pointer to a chromosome index in a single
/// walk. [`SelectionOperator::select_pair`] draws two entries uniformly from
/// this pointer set, so chromosomes spanning more pointers are
/// proportionally more likely.
///
/// Compared to spinning a roulette wheel once per draw, the single-spin
/// pointer comb guarantees each chromosome a selection count within one of
/// its expectation.
#[derive(Debug)]
pub struct StochasticUniversalSampling {
    selection_size: usize,
    pointers: Vec<usize>,
}

impl StochasticUniversalSampling {
    /// Creates a stochastic universal sampler with the given pointer count.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` error if `selection_size`
    /// is zero.
    pub fn new(selection_size: usize) -> Result<Self> {
        if selection_size == 0 {
            return Err(GeneticError::Configuration(
                "Stochastic universal sampling requires at least one pointer".to_string(),
            ));
        }
        Ok(Self {
            selection_size,
            pointers: Vec::new(),
        })
    }
}

impl<G: Gene> SelectionOperator<G> for StochasticUniversalSampling {
    fn prepare(
        &mut self,
        _status: &StatusInfo,
        population: &Population<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        if !population.is_evaluated() {
            return Err(GeneticError::InvalidState(
                "Stochastic universal sampling requires an evaluated population".to_string(),
            ));
        }
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let total = population.total_fitness();
        if total <= 0.0 {
            return Err(GeneticError::Selection(
                "Stochastic universal sampling requires a positive fitness total".to_string(),
            ));
        }

        let spacing = total / self.selection_size as f64;
        let phase = rng.random() * spacing;

        self.pointers.clear();
        self.pointers.reserve(self.selection_size);
        let mut cumulative = 0.0;
        let mut index = 0;
        for pointer in 0..self.selection_size {
            let target = phase + pointer as f64 * spacing;
            while index < population.len() - 1 {
                let fitness = population[index].fitness().unwrap_or(0.0);
                if cumulative + fitness > target {
                    break;
                }
                cumulative += fitness;
                index += 1;
            }
            self.pointers.push(index);
        }
        Ok(())
    }

    fn select_pair(
        &self,
        population: &Population<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome<G>, Chromosome<G>)> {
        if self.pointers.is_empty() {
            return Err(GeneticError::InvalidState(
                "Stochastic universal sampling was not prepared for this population".to_string(),
            ));
        }
        if self.pointers.iter().any(|&p| p >= population.len()) {
            return Err(GeneticError::InvalidState(
                "Stochastic universal sampling pointers are stale for this population"
                    .to_string(),
            ));
        }

        let first = population[self.pointers[rng.index(self.pointers.len())]].clone();
        let second = population[self.pointers[rng.index(self.pointers.len())]].clone();
        Ok((first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::Chromosome;
    use crate::fitness::FitnessFunction;
    use crate::gene::IntGene;

    struct ValueScore;

    impl FitnessFunction<IntGene> for ValueScore {
        fn evaluate(&self, chromosome: &Chromosome<IntGene>) -> f64 {
            chromosome.genes()[0].value() as f64
        }
    }

    fn evaluated_population(values: &[i64]) -> Population<IntGene> {
        let mut population = Population::new();
        for &v in values {
            let gene = IntGene::new(v, 0, 100).unwrap();
            population.push(Chromosome::from_genes(vec![gene], false, true));
        }
        population.evaluate(&ValueScore, None, 1000).unwrap();
        population
    }

    #[test]
    fn test_zero_selection_size_rejected() {
        assert!(matches!(
            StochasticUniversalSampling::new(0),
            Err(GeneticError::Configuration(_))
        ));
    }

    #[test]
    fn test_pointer_counts_track_fitness_share() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let status = StatusInfo::default();
        // Fitness shares: 10%, 60%, 30%
        let population = evaluated_population(&[10, 60, 30]);

        let mut selection = StochasticUniversalSampling::new(10).unwrap();
        selection.prepare(&status, &population, &mut rng).unwrap();

        let counts = population
            .iter()
            .enumerate()
            .map(|(i, _)| selection.pointers.iter().filter(|&&p| p == i).count())
            .collect::<Vec<usize>>();

        // With 10 pointers each chromosome's count is within one of its
        // expected share
        assert!((counts[0] as i64 - 1).abs() <= 1);
        assert!((counts[1] as i64 - 6).abs() <= 1);
        assert!((counts[2] as i64 - 3).abs() <= 1);
        assert_eq!(counts.iter().sum::<usize>(), 10);
    }

    #[test]
    fn test_select_before_prepare_fails() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let population = evaluated_population(&[1, 2]);
        let selection = StochasticUniversalSampling::new(4).unwrap();

        assert!(matches!(
            selection.select_pair(&population, &mut rng),
            Err(GeneticError::InvalidState(_))
        ));
    }

    #[test]
    fn test_zero_total_fitness_rejected() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let status = StatusInfo::default();
        let population = evaluated_population(&[0, 0]);

        let mut selection = StochasticUniversalSampling::new(4).unwrap();
        assert!(matches!(
            selection.prepare(&status, &population, &mut rng),
            Err(GeneticError::Selection(_))
        ));
    }
}
