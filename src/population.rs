//! # Population
//!
//! A [`Population`] owns one generation's chromosomes together with its
//! fitness bookkeeping: the cached best index, the fitness totals, and the
//! `evaluated`/`sorted` status flags.
//!
//! [`Population::evaluate`] scores every chromosome that has no fitness yet
//! and then recomputes the aggregates from scratch over the whole population,
//! so a second call with nothing new to score is a cheap no-op that reports
//! zero evaluations. When the number of unevaluated chromosomes reaches the
//! caller's parallel threshold, scoring fans out over rayon and only the
//! aggregate pass stays sequential.

use rayon::prelude::*;

use crate::chromosome::{Chromosome, ChromosomeTemplate};
use crate::error::{GeneticError, Result};
use crate::fitness::{FitnessFunction, FitnessTransform};
use crate::gene::Gene;
use crate::rng::RandomNumberGenerator;

/// The set of chromosomes under evolution in one generation.
///
/// Index access returns chromosomes by insertion order before a sort and by
/// descending fitness rank after one.
#[derive(Clone, Debug)]
pub struct Population<G: Gene> {
    chromosomes: Vec<Chromosome<G>>,
    best: Option<usize>,
    total_fitness: f64,
    total_raw_fitness: f64,
    evaluated: bool,
    sorted: bool,
}

impl<G: Gene> Population<G> {
    /// Creates an empty population for manual assembly.
    pub fn new() -> Self {
        Self {
            chromosomes: Vec::new(),
            best: None,
            total_fitness: 0.0,
            total_raw_fitness: 0.0,
            evaluated: false,
            sorted: false,
        }
    }

    /// Creates a population pre-filled with `size` randomized chromosomes
    /// stamped from the template.
    pub fn from_template(
        template: &ChromosomeTemplate<G>,
        size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        let mut population = Self::new();
        population.chromosomes.reserve(size);
        for _ in 0..size {
            population.chromosomes.push(template.instantiate(rng));
        }
        population
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome<G>> {
        self.chromosomes.iter()
    }

    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Sum of altered fitness over all evaluated chromosomes.
    pub fn total_fitness(&self) -> f64 {
        self.total_fitness
    }

    /// Sum of raw fitness over all evaluated chromosomes.
    pub fn total_raw_fitness(&self) -> f64 {
        self.total_raw_fitness
    }

    pub fn average_fitness(&self) -> f64 {
        if self.chromosomes.is_empty() {
            0.0
        } else {
            self.total_fitness / self.chromosomes.len() as f64
        }
    }

    pub fn average_raw_fitness(&self) -> f64 {
        if self.chromosomes.is_empty() {
            0.0
        } else {
            self.total_raw_fitness / self.chromosomes.len() as f64
        }
    }

    /// The chromosome of maximal fitness among currently evaluated ones, or
    /// `None` if nothing has been evaluated.
    pub fn best(&self) -> Option<&Chromosome<G>> {
        self.best.map(|index| &self.chromosomes[index])
    }

    /// Appends a chromosome, invalidating the evaluation and sort caches.
    ///
    /// The chromosome's own fitness state is untouched, so an elite clone
    /// inserted here keeps its score and is skipped by the next
    /// [`Population::evaluate`] pass.
    pub fn push(&mut self, chromosome: Chromosome<G>) {
        self.chromosomes.push(chromosome);
        self.evaluated = false;
        self.sorted = false;
        self.best = None;
    }

    /// Drops chromosomes beyond `size`, invalidating caches if anything was
    /// removed.
    pub(crate) fn truncate(&mut self, size: usize) {
        if self.chromosomes.len() > size {
            self.chromosomes.truncate(size);
            self.evaluated = false;
            self.sorted = false;
            self.best = None;
        }
    }

    /// Scores every unevaluated chromosome and recomputes the aggregates.
    ///
    /// Each unevaluated chromosome receives `raw = fitness_function(c)` and
    /// `fitness = transform(c, raw)` when a transform is configured, else the
    /// raw score. When at least `parallel_threshold` chromosomes need
    /// scoring, evaluation fans out over rayon; the best/total aggregate pass
    /// is always sequential. Aggregates are recomputed from scratch over the
    /// whole population, so externally modified fitness values are never
    /// stale here.
    ///
    /// # Returns
    ///
    /// The number of chromosomes actually (re-)evaluated by this call.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::FitnessCalculation` error if any score is
    /// non-finite or any altered score is negative: the weighted-sampling
    /// selection strategies require non-negative weights.
    pub fn evaluate(
        &mut self,
        fitness_function: &dyn FitnessFunction<G>,
        transform: Option<&dyn FitnessTransform<G>>,
        parallel_threshold: usize,
    ) -> Result<usize> {
        let unevaluated = self
            .chromosomes
            .iter()
            .filter(|c| !c.is_evaluated())
            .count();

        if unevaluated >= parallel_threshold.max(1) {
            self.chromosomes
                .par_iter_mut()
                .filter(|c| !c.is_evaluated())
                .try_for_each(|chromosome| Self::score(chromosome, fitness_function, transform))?;
        } else {
            for chromosome in self.chromosomes.iter_mut().filter(|c| !c.is_evaluated()) {
                Self::score(chromosome, fitness_function, transform)?;
            }
        }

        self.recompute_aggregates();
        self.evaluated = true;
        Ok(unevaluated)
    }

    fn score(
        chromosome: &mut Chromosome<G>,
        fitness_function: &dyn FitnessFunction<G>,
        transform: Option<&dyn FitnessTransform<G>>,
    ) -> Result<()> {
        let raw = fitness_function.evaluate(chromosome);
        if !raw.is_finite() {
            return Err(GeneticError::FitnessCalculation(format!(
                "Non-finite fitness score encountered: {}",
                raw
            )));
        }

        let altered = match transform {
            Some(transform) => transform.transform(chromosome, raw),
            None => raw,
        };
        if !altered.is_finite() || altered < 0.0 {
            return Err(GeneticError::FitnessCalculation(format!(
                "Fitness must be finite and non-negative, got {}",
                altered
            )));
        }

        chromosome.set_scores(raw, altered);
        Ok(())
    }

    fn recompute_aggregates(&mut self) {
        self.total_fitness = 0.0;
        self.total_raw_fitness = 0.0;
        self.best = None;

        let mut best_fitness = f64::NEG_INFINITY;
        for (index, chromosome) in self.chromosomes.iter().enumerate() {
            if let (Some(fitness), Some(raw)) = (chromosome.fitness(), chromosome.raw_fitness()) {
                self.total_fitness += fitness;
                self.total_raw_fitness += raw;
                if fitness > best_fitness {
                    best_fitness = fitness;
                    self.best = Some(index);
                }
            }
        }
    }

    /// Stable-sorts chromosomes descending by fitness.
    ///
    /// A no-op if the population is already sorted.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::InvalidState` error if called before
    /// [`Population::evaluate`] on this population.
    pub fn sort(&mut self) -> Result<()> {
        if self.sorted {
            return Ok(());
        }
        if !self.evaluated {
            return Err(GeneticError::InvalidState(
                "Population must be evaluated before it can be sorted".to_string(),
            ));
        }

        self.chromosomes.sort_by(|a, b| {
            let fa = a.fitness().unwrap_or(f64::NEG_INFINITY);
            let fb = b.fitness().unwrap_or(f64::NEG_INFINITY);
            fb.partial_cmp(&fa).unwrap_or(std::cmp::Ordering::Equal)
        });

        self.sorted = true;
        if !self.chromosomes.is_empty() {
            self.best = Some(0);
        }
        Ok(())
    }
}

impl<G: Gene> std::ops::Index<usize> for Population<G> {
    type Output = Chromosome<G>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.chromosomes[index]
    }
}

impl<'a, G: Gene> IntoIterator for &'a Population<G> {
    type Item = &'a Chromosome<G>;
    type IntoIter = std::slice::Iter<'a, Chromosome<G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chromosomes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gene::IntGene;

    struct ValueSum;

    impl FitnessFunction<IntGene> for ValueSum {
        fn evaluate(&self, chromosome: &Chromosome<IntGene>) -> f64 {
            chromosome.genes().iter().map(|g| g.value() as f64).sum()
        }
    }

    struct NegativeScore;

    impl FitnessFunction<IntGene> for NegativeScore {
        fn evaluate(&self, _chromosome: &Chromosome<IntGene>) -> f64 {
            -1.0
        }
    }

    fn chromosome_of(values: &[i64]) -> Chromosome<IntGene> {
        let genes = values
            .iter()
            .map(|&v| IntGene::new(v, 0, 100).unwrap())
            .collect();
        Chromosome::from_genes(genes, false, true)
    }

    fn sample_population() -> Population<IntGene> {
        let mut population = Population::new();
        population.push(chromosome_of(&[1]));
        population.push(chromosome_of(&[5]));
        population.push(chromosome_of(&[3]));
        population
    }

    #[test]
    fn test_evaluate_scores_all_and_finds_best() {
        let mut population = sample_population();
        let evaluated = population.evaluate(&ValueSum, None, 1000).unwrap();

        assert_eq!(evaluated, 3);
        assert!(population.is_evaluated());
        assert_eq!(population.total_fitness(), 9.0);
        assert_eq!(population.average_fitness(), 3.0);
        assert_eq!(population.best().unwrap().fitness(), Some(5.0));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut population = sample_population();
        population.evaluate(&ValueSum, None, 1000).unwrap();
        let best_before = population.best().unwrap().fitness();
        let total_before = population.total_fitness();

        let evaluated = population.evaluate(&ValueSum, None, 1000).unwrap();
        assert_eq!(evaluated, 0);
        assert_eq!(population.best().unwrap().fitness(), best_before);
        assert_eq!(population.total_fitness(), total_before);
    }

    #[test]
    fn test_evaluate_parallel_matches_sequential() {
        let mut sequential = sample_population();
        let mut parallel = sample_population();

        sequential.evaluate(&ValueSum, None, 1000).unwrap();
        // Threshold of 1 forces the rayon path
        parallel.evaluate(&ValueSum, None, 1).unwrap();

        assert_eq!(sequential.total_fitness(), parallel.total_fitness());
        assert_eq!(
            sequential.best().unwrap().fitness(),
            parallel.best().unwrap().fitness()
        );
    }

    #[test]
    fn test_evaluate_applies_transform() {
        use crate::fitness::Minimize;

        let mut population = sample_population();
        let transform = Minimize::new(10.0);
        population
            .evaluate(&ValueSum, Some(&transform), 1000)
            .unwrap();

        // Raw sums are 1, 5, 3; altered scores are 9, 5, 7
        assert_eq!(population.total_raw_fitness(), 9.0);
        assert_eq!(population.total_fitness(), 21.0);
        assert_eq!(population.best().unwrap().raw_fitness(), Some(1.0));
    }

    #[test]
    fn test_evaluate_rejects_negative_fitness() {
        let mut population = sample_population();
        let result = population.evaluate(&NegativeScore, None, 1000);
        assert!(matches!(
            result,
            Err(GeneticError::FitnessCalculation(_))
        ));
    }

    #[test]
    fn test_sort_requires_evaluation() {
        let mut population = sample_population();
        assert!(matches!(
            population.sort(),
            Err(GeneticError::InvalidState(_))
        ));

        population.evaluate(&ValueSum, None, 1000).unwrap();
        population.sort().unwrap();
        assert!(population.is_sorted());

        let ranked: Vec<f64> = population.iter().map(|c| c.fitness().unwrap()).collect();
        assert_eq!(ranked, vec![5.0, 3.0, 1.0]);
        assert_eq!(population[0].fitness(), Some(5.0));
    }

    #[test]
    fn test_push_invalidates_caches() {
        let mut population = sample_population();
        population.evaluate(&ValueSum, None, 1000).unwrap();
        population.sort().unwrap();

        population.push(chromosome_of(&[7]));
        assert!(!population.is_evaluated());
        assert!(!population.is_sorted());

        let evaluated = population.evaluate(&ValueSum, None, 1000).unwrap();
        assert_eq!(evaluated, 1);
        assert_eq!(population.best().unwrap().fitness(), Some(7.0));
    }

    #[test]
    fn test_preevaluated_chromosomes_are_skipped() {
        let mut population = sample_population();
        population.evaluate(&ValueSum, None, 1000).unwrap();

        let carried = population.best().unwrap().clone();
        let mut next = Population::new();
        next.push(carried);
        next.push(chromosome_of(&[2]));

        let evaluated = next.evaluate(&ValueSum, None, 1000).unwrap();
        assert_eq!(evaluated, 1);
        assert_eq!(next.total_fitness(), 7.0);
    }

    #[test]
    fn test_from_template_seeds_population() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        let template = ChromosomeTemplate::fixed(IntGene::new(0, 0, 9).unwrap(), 4);
        let population = Population::from_template(&template, 12, &mut rng);

        assert_eq!(population.len(), 12);
        assert!(population.iter().all(|c| c.len() == 4 && !c.is_evaluated()));
    }
}
