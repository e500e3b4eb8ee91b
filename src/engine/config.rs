//! Engine configuration and its builder.

use crate::chromosome::ChromosomeTemplate;
use crate::crossover::CrossoverOperator;
use crate::engine::observer::EvolutionObserver;
use crate::error::{GeneticError, Result};
use crate::fitness::{FitnessFunction, FitnessTransform};
use crate::gene::Gene;
use crate::mutation::MutationOperator;
use crate::selection::{EliteSelection, SelectionOperator};
use crate::termination::TerminateCondition;

/// Minimum number of unevaluated chromosomes before fitness evaluation fans
/// out over rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

const DEFAULT_POPULATION_SIZE: usize = 100;

/// The validated parameter bundle for one engine run.
///
/// Constructed through [`EngineConfig::builder`]; the builder's `build`
/// enforces the cross-field invariants (a crossover operator must accompany
/// a positive crossover probability, the elite count must leave room for
/// offspring, probabilities must be valid).
pub struct EngineConfig<G: Gene> {
    pub(crate) population_size: usize,
    pub(crate) template: ChromosomeTemplate<G>,
    pub(crate) fitness: Box<dyn FitnessFunction<G>>,
    pub(crate) transform: Option<Box<dyn FitnessTransform<G>>>,
    pub(crate) terminate: Box<dyn TerminateCondition>,
    pub(crate) elite: Option<EliteSelection>,
    pub(crate) selection: Box<dyn SelectionOperator<G>>,
    pub(crate) crossover: Option<Box<dyn CrossoverOperator<G>>>,
    pub(crate) mutation: Box<dyn MutationOperator<G>>,
    pub(crate) crossover_probability: f64,
    pub(crate) mutation_probability: f64,
    pub(crate) parallel_threshold: usize,
    pub(crate) observer: Option<Box<dyn EvolutionObserver<G>>>,
    pub(crate) seed: Option<u64>,
}

impl<G: Gene> EngineConfig<G> {
    /// Returns a builder for assembling an `EngineConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use allele::chromosome::{Chromosome, ChromosomeTemplate};
    /// use allele::engine::EngineConfig;
    /// use allele::fitness::FitnessFunction;
    /// use allele::gene::BoolGene;
    /// use allele::mutation::UniformMutation;
    /// use allele::selection::TournamentSelection;
    /// use allele::termination::MaxGenerations;
    ///
    /// struct OnesCount;
    ///
    /// impl FitnessFunction<BoolGene> for OnesCount {
    ///     fn evaluate(&self, chromosome: &Chromosome<BoolGene>) -> f64 {
    ///         chromosome.genes().iter().filter(|g| g.value()).count() as f64
    ///     }
    /// }
    ///
    /// let config = EngineConfig::builder()
    ///     .population_size(20)
    ///     .template(ChromosomeTemplate::fixed(BoolGene::new(false), 16))
    ///     .fitness_function(OnesCount)
    ///     .parent_selection(TournamentSelection::default())
    ///     .mutation(UniformMutation::new(), 0.05)
    ///     .terminate(MaxGenerations::new(10))
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn builder() -> EngineConfigBuilder<G> {
        EngineConfigBuilder::default()
    }
}

/// Builder for [`EngineConfig`].
///
/// Provides a fluent interface; `build` validates the assembled
/// configuration.
pub struct EngineConfigBuilder<G: Gene> {
    population_size: Option<usize>,
    template: Option<ChromosomeTemplate<G>>,
    fitness: Option<Box<dyn FitnessFunction<G>>>,
    transform: Option<Box<dyn FitnessTransform<G>>>,
    terminate: Option<Box<dyn TerminateCondition>>,
    elite: Option<EliteSelection>,
    selection: Option<Box<dyn SelectionOperator<G>>>,
    crossover: Option<Box<dyn CrossoverOperator<G>>>,
    mutation: Option<Box<dyn MutationOperator<G>>>,
    crossover_probability: f64,
    mutation_probability: f64,
    parallel_threshold: usize,
    observer: Option<Box<dyn EvolutionObserver<G>>>,
    seed: Option<u64>,
}

impl<G: Gene> Default for EngineConfigBuilder<G> {
    fn default() -> Self {
        Self {
            population_size: None,
            template: None,
            fitness: None,
            transform: None,
            terminate: None,
            elite: None,
            selection: None,
            crossover: None,
            mutation: None,
            crossover_probability: 0.0,
            mutation_probability: 0.0,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            observer: None,
            seed: None,
        }
    }
}

impl<G: Gene> EngineConfigBuilder<G> {
    /// Sets the population size (default 100).
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }

    /// Sets the chromosome template the initial population is stamped from.
    pub fn template(mut self, template: ChromosomeTemplate<G>) -> Self {
        self.template = Some(template);
        self
    }

    /// Sets the fitness function.
    pub fn fitness_function(mut self, fitness: impl FitnessFunction<G> + 'static) -> Self {
        self.fitness = Some(Box::new(fitness));
        self
    }

    /// Sets the optional fitness transform applied after the raw score.
    pub fn fitness_transform(mut self, transform: impl FitnessTransform<G> + 'static) -> Self {
        self.transform = Some(Box::new(transform));
        self
    }

    /// Sets the terminate condition.
    ///
    /// Stateful conditions are scoped to one run; build a fresh config for
    /// each run.
    pub fn terminate(mut self, terminate: impl TerminateCondition + 'static) -> Self {
        self.terminate = Some(Box::new(terminate));
        self
    }

    /// Enables elitism with the given elite selection.
    pub fn elite_selection(mut self, elite: EliteSelection) -> Self {
        self.elite = Some(elite);
        self
    }

    /// Sets the parent-selection operator.
    pub fn parent_selection(mut self, selection: impl SelectionOperator<G> + 'static) -> Self {
        self.selection = Some(Box::new(selection));
        self
    }

    /// Sets the crossover operator and the per-mating-event crossover
    /// probability.
    pub fn crossover(
        mut self,
        operator: impl CrossoverOperator<G> + 'static,
        probability: f64,
    ) -> Self {
        self.crossover = Some(Box::new(operator));
        self.crossover_probability = probability;
        self
    }

    /// Sets the mutation operator and the per-gene mutation probability.
    pub fn mutation(
        mut self,
        operator: impl MutationOperator<G> + 'static,
        probability: f64,
    ) -> Self {
        self.mutation = Some(Box::new(operator));
        self.mutation_probability = probability;
        self
    }

    /// Sets the minimum number of unevaluated chromosomes before fitness
    /// evaluation runs in parallel (default 1000).
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Attaches an observer for the engine's notification hooks.
    pub fn observer(mut self, observer: impl EvolutionObserver<G> + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Seeds the engine's random number generator for a reproducible run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` error if a required component
    /// is missing or a cross-field invariant is violated.
    pub fn build(self) -> Result<EngineConfig<G>> {
        let population_size = self.population_size.unwrap_or(DEFAULT_POPULATION_SIZE);
        if population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        let template = self.template.ok_or_else(|| {
            GeneticError::Configuration("Chromosome template not specified".to_string())
        })?;
        let fitness = self.fitness.ok_or_else(|| {
            GeneticError::Configuration("Fitness function not specified".to_string())
        })?;
        let terminate = self.terminate.ok_or_else(|| {
            GeneticError::Configuration("Terminate condition not specified".to_string())
        })?;
        let selection = self.selection.ok_or_else(|| {
            GeneticError::Configuration("Parent-selection operator not specified".to_string())
        })?;
        let mutation = self.mutation.ok_or_else(|| {
            GeneticError::Configuration("Mutation operator not specified".to_string())
        })?;

        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err(GeneticError::Configuration(
                "Crossover probability must be in the range [0.0, 1.0]".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(GeneticError::Configuration(
                "Mutation probability must be in the range [0.0, 1.0]".to_string(),
            ));
        }
        if self.crossover_probability > 0.0 && self.crossover.is_none() {
            return Err(GeneticError::Configuration(
                "A crossover operator is required when the crossover probability is positive"
                    .to_string(),
            ));
        }
        if let Some(elite) = &self.elite {
            if elite.count() >= population_size {
                return Err(GeneticError::Configuration(format!(
                    "Elite count {} must be smaller than the population size {}",
                    elite.count(),
                    population_size
                )));
            }
        }

        Ok(EngineConfig {
            population_size,
            template,
            fitness,
            transform: self.transform,
            terminate,
            elite: self.elite,
            selection,
            crossover: self.crossover,
            mutation,
            crossover_probability: self.crossover_probability,
            mutation_probability: self.mutation_probability,
            parallel_threshold: self.parallel_threshold,
            observer: self.observer,
            seed: self.seed,
        })
    }
}
