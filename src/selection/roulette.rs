//! Roulette-wheel (fitness-proportionate) selection backed by an alias
//! table.

use crate::chromosome::Chromosome;
use crate::engine::status::StatusInfo;
use crate::error::{GeneticError, Result};
use crate::gene::Gene;
use crate::math::AliasSampler;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionOperator;

/// Selects each parent with probability proportional to its fitness.
///
/// [`SelectionOperator::prepare`] rebuilds an [`AliasSampler`] over the
/// population's fitness values every generation (the table is not
/// incrementally updatable), using the population's fitness total as the
/// normalizing sum; each draw then costs O(1).
///
/// All fitness values must be non-negative and at least one must be
/// positive, which [`Population::evaluate`] already guarantees.
#[derive(Debug, Default)]
pub struct RouletteWheelSelection {
    sampler: Option<AliasSampler>,
}

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self { sampler: None }
    }
}

impl<G: Gene> SelectionOperator<G> for RouletteWheelSelection {
    fn prepare(
        &mut self,
        _status: &StatusInfo,
        population: &Population<G>,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        if !population.is_evaluated() {
            return Err(GeneticError::InvalidState(
                "Roulette-wheel selection requires an evaluated population".to_string(),
            ));
        }

        let weights: Vec<f64> = population
            .iter()
            .map(|c| c.fitness().unwrap_or(0.0))
            .collect();
        self.sampler = Some(AliasSampler::with_total(
            &weights,
            population.total_fitness(),
        )?);
        Ok(())
    }

    fn select_pair(
        &self,
        population: &Population<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome<G>, Chromosome<G>)> {
        let sampler = self.sampler.as_ref().ok_or_else(|| {
            GeneticError::InvalidState(
                "Roulette-wheel selection was not prepared for this population".to_string(),
            )
        })?;
        if sampler.len() != population.len() {
            return Err(GeneticError::InvalidState(
                "Roulette-wheel table is stale for this population".to_string(),
            ));
        }

        let first = population[sampler.sample(rng)].clone();
        let second = population[sampler.sample(rng)].clone();
        Ok((first, second))
    }
}
