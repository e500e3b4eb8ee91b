//! Observability hooks fired by the engine at defined points of the
//! generational loop.

use crate::chromosome::Chromosome;
use crate::engine::status::StatusInfo;
use crate::gene::Gene;
use crate::population::Population;

/// Read-only callbacks into the evolutionary loop.
///
/// Every hook has an empty default body, so implementors override only the
/// events they care about. Callbacks receive read-only snapshots and must
/// not assume they can influence the run: the engine dispatches every hook
/// through a panic guard, and a panicking callback is logged and swallowed
/// rather than aborting the evolution.
pub trait EvolutionObserver<G>: Send
where
    G: Gene,
{
    /// The initial population has been seeded, before the first evaluation.
    fn on_population_initialized(&self, population: &Population<G>) {
        let _ = population;
    }

    /// A generation has been evaluated and the status snapshot updated.
    fn on_generation_evaluated(&self, status: &StatusInfo, population: &Population<G>) {
        let _ = (status, population);
    }

    /// Elites were cloned into the next generation.
    fn on_elites_selected(&self, elites: &[Chromosome<G>]) {
        let _ = elites;
    }

    /// A parent pair was selected for a mating event.
    fn on_parents_selected(&self, first: &Chromosome<G>, second: &Chromosome<G>) {
        let _ = (first, second);
    }

    /// Crossover is about to be applied to the pair.
    fn on_before_crossover(&self, first: &Chromosome<G>, second: &Chromosome<G>) {
        let _ = (first, second);
    }

    /// Crossover was applied to the pair.
    fn on_after_crossover(&self, first: &Chromosome<G>, second: &Chromosome<G>) {
        let _ = (first, second);
    }

    /// Per-gene mutation is about to walk the chromosome.
    fn on_before_mutation(&self, chromosome: &Chromosome<G>) {
        let _ = chromosome;
    }

    /// Per-gene mutation finished; `mutated_genes` positions changed.
    fn on_after_mutation(&self, chromosome: &Chromosome<G>, mutated_genes: usize) {
        let _ = (chromosome, mutated_genes);
    }
}
