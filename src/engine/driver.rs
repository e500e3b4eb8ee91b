//! The generational loop.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::chromosome::Chromosome;
use crate::engine::config::EngineConfig;
use crate::engine::observer::EvolutionObserver;
use crate::engine::status::StatusInfo;
use crate::error::{GeneticError, Result};
use crate::gene::Gene;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

/// The best chromosome of the final generation together with the final
/// status snapshot.
#[derive(Clone, Debug)]
pub struct EvolutionOutcome<G: Gene> {
    pub best: Chromosome<G>,
    pub status: StatusInfo,
}

/// The top-level orchestrator: owns one configuration and the current
/// population, and runs the loop
/// evaluate → terminate-check → select → crossover → mutate → replace.
///
/// # Example
///
/// ```rust
/// use allele::chromosome::{Chromosome, ChromosomeTemplate};
/// use allele::engine::{EngineConfig, GeneticEngine};
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
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut engine = GeneticEngine::new(config);
/// let outcome = engine.run().unwrap();
/// assert_eq!(outcome.status.generations, 10);
/// ```
pub struct GeneticEngine<G: Gene> {
    config: EngineConfig<G>,
    population: Population<G>,
    status: StatusInfo,
    rng: RandomNumberGenerator,
    seeded: bool,
}

impl<G: Gene> GeneticEngine<G> {
    /// Creates an engine from a validated configuration.
    pub fn new(config: EngineConfig<G>) -> Self {
        let rng = match config.seed {
            Some(seed) => RandomNumberGenerator::from_seed(seed),
            None => RandomNumberGenerator::new(),
        };
        Self {
            config,
            population: Population::new(),
            status: StatusInfo::default(),
            rng,
            seeded: false,
        }
    }

    /// Read-only access to the current generation.
    pub fn population(&self) -> &Population<G> {
        &self.population
    }

    /// The most recent per-generation snapshot.
    pub fn status(&self) -> &StatusInfo {
        &self.status
    }

    /// Runs the evolutionary loop until the terminate condition fires.
    ///
    /// Blocks for the duration of the run. Calling `run` again continues
    /// from the current population rather than starting over.
    ///
    /// # Errors
    ///
    /// Propagates precondition and numerical failures from the configured
    /// operators and the fitness function.
    pub fn run(&mut self) -> Result<EvolutionOutcome<G>> {
        if !self.seeded {
            self.seed_population();
        }

        loop {
            self.evaluate_generation()?;
            if self.config.terminate.should_stop(&self.status) {
                debug!(
                    generations = self.status.generations,
                    evaluations = self.status.evaluations,
                    best_fitness = self.status.best_fitness,
                    "terminate condition fired"
                );
                break;
            }
            self.evolve()?;
        }

        let best = self
            .population
            .best()
            .cloned()
            .ok_or(GeneticError::EmptyPopulation)?;
        Ok(EvolutionOutcome {
            best,
            status: self.status,
        })
    }

    fn seed_population(&mut self) {
        self.population = Population::from_template(
            &self.config.template,
            self.config.population_size,
            &mut self.rng,
        );
        self.seeded = true;
        Self::notify(&self.config.observer, |observer| {
            observer.on_population_initialized(&self.population)
        });
    }

    fn evaluate_generation(&mut self) -> Result<()> {
        let evaluated = self.population.evaluate(
            self.config.fitness.as_ref(),
            self.config.transform.as_deref(),
            self.config.parallel_threshold,
        )?;

        self.status.generations += 1;
        self.status.evaluations += evaluated as u64;
        if let Some(best) = self.population.best() {
            self.status.best_fitness = best.fitness().unwrap_or(0.0);
            self.status.best_raw_fitness = best.raw_fitness().unwrap_or(0.0);
        }
        self.status.average_fitness = self.population.average_fitness();
        self.status.average_raw_fitness = self.population.average_raw_fitness();

        debug!(
            generation = self.status.generations,
            evaluated,
            best_fitness = self.status.best_fitness,
            average_fitness = self.status.average_fitness,
            "generation evaluated"
        );
        Self::notify(&self.config.observer, |observer| {
            observer.on_generation_evaluated(&self.status, &self.population)
        });
        Ok(())
    }

    /// Builds the next generation and installs it in place of the current
    /// one.
    fn evolve(&mut self) -> Result<()> {
        if self.config.elite.is_some() || self.config.selection.needs_sorted() {
            self.population.sort()?;
        }
        self.config
            .selection
            .prepare(&self.status, &self.population, &mut self.rng)?;

        let mut next = Population::new();

        if let Some(elite) = &self.config.elite {
            let mut elites = elite.select_many(&self.population)?;
            for survivor in &mut elites {
                survivor.increment_age();
            }
            Self::notify(&self.config.observer, |observer| {
                observer.on_elites_selected(&elites)
            });
            for survivor in elites {
                next.push(survivor);
            }
        }

        while next.len() < self.config.population_size {
            let (mut first, mut second) = self
                .config
                .selection
                .select_pair(&self.population, &mut self.rng)?;
            Self::notify(&self.config.observer, |observer| {
                observer.on_parents_selected(&first, &second)
            });
            first.reset_for_breeding();
            second.reset_for_breeding();

            let crossed = match &self.config.crossover {
                Some(operator) if self.rng.random() < self.config.crossover_probability => {
                    Self::notify(&self.config.observer, |observer| {
                        observer.on_before_crossover(&first, &second)
                    });
                    operator.cross(&mut first, &mut second, &mut self.rng)?;
                    self.status.crossovers += 2;
                    Self::notify(&self.config.observer, |observer| {
                        observer.on_after_crossover(&first, &second)
                    });
                    true
                }
                _ => false,
            };

            for child in [&mut first, &mut second] {
                Self::notify(&self.config.observer, |observer| {
                    observer.on_before_mutation(child)
                });
                let mutated = child.mutate(
                    self.config.mutation.as_ref(),
                    self.config.mutation_probability,
                    &mut self.rng,
                )?;
                self.status.mutated_genes += mutated as u64;
                if mutated == 0 && !crossed {
                    // Survived one generation unchanged
                    child.increment_age();
                }
                Self::notify(&self.config.observer, |observer| {
                    observer.on_after_mutation(child, mutated)
                });
            }

            next.push(first);
            next.push(second);
        }

        // Two offspring per mating event can overshoot an odd target by one
        next.truncate(self.config.population_size);
        self.population = next;
        Ok(())
    }

    /// Single dispatch point for observer callbacks. A panicking callback is
    /// logged and swallowed so observability can never abort the run.
    fn notify<F>(observer: &Option<Box<dyn EvolutionObserver<G>>>, event: F)
    where
        F: FnOnce(&dyn EvolutionObserver<G>),
    {
        if let Some(observer) = observer {
            if catch_unwind(AssertUnwindSafe(|| event(observer.as_ref()))).is_err() {
                warn!("observer callback panicked; continuing the run");
            }
        }
    }
}
