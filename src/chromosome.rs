//! # Chromosome and ChromosomeTemplate
//!
//! A [`Chromosome`] is an ordered sequence of genes together with its derived
//! state: fitness (altered and raw), age, and the structural flags that
//! constrain how operators may act on it. The absence of a fitness value
//! doubles as the "not yet evaluated" marker.
//!
//! A [`ChromosomeTemplate`] is the inert counterpart: genes and flags only.
//! Templates are never scored or evolved; they exist to stamp out randomized
//! chromosomes when a population is seeded. Keeping the template a distinct
//! type makes "fitness of a sample" a compile-time impossibility instead of a
//! runtime check.
//!
//! ## Example
//!
//! ```rust
//! use allele::chromosome::ChromosomeTemplate;
//! use allele::gene::IntGene;
//! use allele::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let sample = IntGene::new(0, 0, 9).unwrap();
//! let template = ChromosomeTemplate::fixed(sample, 5);
//!
//! let chromosome = template.instantiate(&mut rng);
//! assert_eq!(chromosome.len(), 5);
//! assert!(!chromosome.is_evaluated());
//! ```

use crate::error::{GeneticError, Result};
use crate::gene::Gene;
use crate::mutation::MutationOperator;
use crate::rng::RandomNumberGenerator;

/// An inert chromosome blueprint: genes and structural flags, no fitness or
/// age state.
///
/// Three shapes are supported:
/// - [`ChromosomeTemplate::fixed`]: a sample gene repeated to a fixed length,
///   each copy randomized at instantiation.
/// - [`ChromosomeTemplate::variable`]: a sample gene with a maximum length;
///   each instantiation draws a uniform length in `[0, max_len]`.
/// - [`ChromosomeTemplate::permutation`]: an explicit symbol multiset whose
///   order alone is randomized (shuffled) at instantiation.
#[derive(Clone, Debug)]
pub struct ChromosomeTemplate<G: Gene> {
    genes: Vec<G>,
    permutation: bool,
    fixed_length: bool,
}

impl<G: Gene> ChromosomeTemplate<G> {
    /// Creates a fixed-length template from a sample gene.
    pub fn fixed(sample: G, len: usize) -> Self {
        Self {
            genes: vec![sample; len],
            permutation: false,
            fixed_length: true,
        }
    }

    /// Creates a variable-length template from a sample gene.
    ///
    /// Instantiation draws a uniform length in `[0, max_len]`, so the
    /// resulting chromosomes may differ in gene count.
    pub fn variable(sample: G, max_len: usize) -> Self {
        Self {
            genes: vec![sample; max_len],
            permutation: false,
            fixed_length: false,
        }
    }

    /// Creates a permutation template from an explicit gene list.
    ///
    /// Instantiated chromosomes carry exactly this multiset of gene values;
    /// only the order is randomized. Crossover and mutation operators applied
    /// to such chromosomes must preserve the multiset.
    pub fn permutation(genes: Vec<G>) -> Self {
        Self {
            genes,
            permutation: true,
            fixed_length: true,
        }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn is_permutation(&self) -> bool {
        self.permutation
    }

    pub fn is_fixed_length(&self) -> bool {
        self.fixed_length
    }

    /// Stamps out a fresh, randomized, unevaluated chromosome.
    pub fn instantiate(&self, rng: &mut RandomNumberGenerator) -> Chromosome<G> {
        let genes = if self.permutation {
            let mut genes = self.genes.clone();
            rng.shuffle(&mut genes);
            genes
        } else {
            let len = if self.fixed_length {
                self.genes.len()
            } else {
                rng.gen_range(0..=self.genes.len())
            };
            self.genes[..len]
                .iter()
                .map(|sample| {
                    let mut gene = sample.clone();
                    gene.randomize(rng);
                    gene
                })
                .collect()
        };

        Chromosome {
            genes,
            fitness: None,
            raw_fitness: None,
            age: 0,
            permutation: self.permutation,
            fixed_length: self.fixed_length,
        }
    }
}

/// An ordered sequence of genes plus derived evolutionary state.
///
/// A chromosome is exclusively owned by the population holding it (or,
/// transiently, by operator code before insertion into a new population).
/// Cloning deep-copies every gene and preserves the fitness state, so an
/// elite clone keeps its score; breeding paths call
/// [`Chromosome::reset_for_breeding`] to obtain a fresh individual instead.
#[derive(Clone, Debug)]
pub struct Chromosome<G: Gene> {
    genes: Vec<G>,
    fitness: Option<f64>,
    raw_fitness: Option<f64>,
    age: u32,
    permutation: bool,
    fixed_length: bool,
}

impl<G: Gene> Chromosome<G> {
    /// Creates a chromosome directly from a gene list.
    ///
    /// Used by tests and by callers assembling populations manually; the
    /// chromosome starts unevaluated with age zero.
    pub fn from_genes(genes: Vec<G>, permutation: bool, fixed_length: bool) -> Self {
        Self {
            genes,
            fitness: None,
            raw_fitness: None,
            age: 0,
            permutation,
            fixed_length,
        }
    }

    pub fn genes(&self) -> &[G] {
        &self.genes
    }

    pub fn gene(&self, index: usize) -> Option<&G> {
        self.genes.get(index)
    }

    pub(crate) fn gene_mut(&mut self, index: usize) -> Option<&mut G> {
        self.genes.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn is_permutation(&self) -> bool {
        self.permutation
    }

    pub fn is_fixed_length(&self) -> bool {
        self.fixed_length
    }

    /// The altered fitness, or `None` if the chromosome has not been
    /// evaluated since its last modification.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// The raw (pre-transform) fitness, or `None` if unevaluated.
    pub fn raw_fitness(&self) -> Option<f64> {
        self.raw_fitness
    }

    /// Generations this chromosome has survived unchanged.
    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    pub(crate) fn set_scores(&mut self, raw: f64, altered: f64) {
        self.raw_fitness = Some(raw);
        self.fitness = Some(altered);
    }

    pub(crate) fn increment_age(&mut self) {
        self.age += 1;
    }

    /// Clears fitness state and resets age, producing a fresh individual.
    ///
    /// Called on parent clones before crossover and mutation are applied.
    pub fn reset_for_breeding(&mut self) {
        self.fitness = None;
        self.raw_fitness = None;
        self.age = 0;
    }

    /// Replaces the gene sequence with newly produced offspring genes,
    /// clearing fitness and resetting age.
    ///
    /// Used by crossover operators to install recombined gene content. The
    /// replacement must have the same length as the current sequence for
    /// fixed-length chromosomes.
    pub(crate) fn install_genes(&mut self, genes: Vec<G>) {
        debug_assert!(!self.fixed_length || genes.len() == self.genes.len());
        self.genes = genes;
        self.fitness = None;
        self.raw_fitness = None;
        self.age = 0;
    }

    /// Exchanges the genes at two positions.
    pub(crate) fn swap_genes(&mut self, a: usize, b: usize) {
        self.genes.swap(a, b);
    }

    /// Applies per-gene mutation across the chromosome.
    ///
    /// Each gene position draws a fresh uniform number; when it does not
    /// exceed `probability`, the mutation operator is applied at that index.
    /// Fitness is cleared whenever at least one gene mutates.
    ///
    /// # Returns
    ///
    /// The number of genes mutated.
    ///
    /// # Errors
    ///
    /// Propagates operator errors, e.g. uniform mutation applied to a
    /// permutation chromosome.
    pub fn mutate(
        &mut self,
        operator: &dyn MutationOperator<G>,
        probability: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        let mut mutated = 0;
        for index in 0..self.genes.len() {
            if rng.random() <= probability {
                operator.mutate_gene(self, index, rng)?;
                mutated += 1;
            }
        }
        if mutated > 0 {
            self.fitness = None;
            self.raw_fitness = None;
            self.age = 0;
        }
        Ok(mutated)
    }

    /// Releases all genes and truncates the sequence to empty.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::InvalidState` error for fixed-length
    /// chromosomes, whose gene count is immutable post-construction.
    pub fn clean(&mut self) -> Result<()> {
        if self.fixed_length {
            return Err(GeneticError::InvalidState(
                "Cannot truncate a fixed-length chromosome".to_string(),
            ));
        }
        self.genes.clear();
        self.fitness = None;
        self.raw_fitness = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gene::{BoolGene, IntGene};
    use crate::mutation::{SwapMutation, UniformMutation};

    fn permutation_of(values: &[i64]) -> Chromosome<IntGene> {
        let genes = values
            .iter()
            .map(|&v| IntGene::new(v, 0, 9).unwrap())
            .collect();
        Chromosome::from_genes(genes, true, true)
    }

    #[test]
    fn test_fixed_template_instantiation() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let template = ChromosomeTemplate::fixed(IntGene::new(0, 0, 9).unwrap(), 8);

        let chromosome = template.instantiate(&mut rng);
        assert_eq!(chromosome.len(), 8);
        assert!(chromosome.is_fixed_length());
        assert!(!chromosome.is_permutation());
        assert!(!chromosome.is_evaluated());
        assert_eq!(chromosome.age(), 0);
    }

    #[test]
    fn test_variable_template_draws_length_in_range() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let template = ChromosomeTemplate::variable(BoolGene::new(false), 10);

        for _ in 0..50 {
            let chromosome = template.instantiate(&mut rng);
            assert!(chromosome.len() <= 10);
            assert!(!chromosome.is_fixed_length());
        }
    }

    #[test]
    fn test_permutation_template_shuffles_without_redrawing() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let genes: Vec<IntGene> = (0..10).map(|v| IntGene::new(v, 0, 9).unwrap()).collect();
        let template = ChromosomeTemplate::permutation(genes.clone());

        let chromosome = template.instantiate(&mut rng);
        assert!(chromosome.is_permutation());

        let mut values: Vec<i64> = chromosome.genes().iter().map(|g| g.value()).collect();
        values.sort_unstable();
        assert_eq!(values, (0..10).collect::<Vec<i64>>());
    }

    #[test]
    fn test_clone_preserves_fitness() {
        let mut chromosome = permutation_of(&[0, 1, 2]);
        chromosome.set_scores(3.0, 5.0);

        let clone = chromosome.clone();
        assert_eq!(clone.fitness(), Some(5.0));
        assert_eq!(clone.raw_fitness(), Some(3.0));
        assert_eq!(clone.genes(), chromosome.genes());
    }

    #[test]
    fn test_reset_for_breeding_clears_state() {
        let mut chromosome = permutation_of(&[0, 1, 2]);
        chromosome.set_scores(3.0, 5.0);
        chromosome.increment_age();

        chromosome.reset_for_breeding();
        assert!(!chromosome.is_evaluated());
        assert_eq!(chromosome.raw_fitness(), None);
        assert_eq!(chromosome.age(), 0);
    }

    #[test]
    fn test_mutate_clears_fitness_and_counts_genes() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let genes: Vec<IntGene> = (0..20).map(|v| IntGene::new(v, 0, 19).unwrap()).collect();
        let mut chromosome = Chromosome::from_genes(genes, false, true);
        chromosome.set_scores(1.0, 1.0);

        let operator = UniformMutation::new();
        let mutated = chromosome.mutate(&operator, 1.0, &mut rng).unwrap();
        assert_eq!(mutated, 20);
        assert!(!chromosome.is_evaluated());
        assert_eq!(chromosome.age(), 0);
    }

    #[test]
    fn test_mutate_with_zero_probability_is_noop() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let mut chromosome = permutation_of(&[0, 1, 2, 3]);
        chromosome.set_scores(2.0, 2.0);

        let operator = SwapMutation::new();
        let mutated = chromosome.mutate(&operator, 0.0, &mut rng).unwrap();
        assert_eq!(mutated, 0);
        assert!(chromosome.is_evaluated());
    }

    #[test]
    fn test_swap_mutation_preserves_multiset() {
        let mut rng = RandomNumberGenerator::from_seed(6);
        let mut chromosome = permutation_of(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

        let operator = SwapMutation::new();
        chromosome.mutate(&operator, 0.5, &mut rng).unwrap();

        let mut values: Vec<i64> = chromosome.genes().iter().map(|g| g.value()).collect();
        values.sort_unstable();
        assert_eq!(values, (0..10).collect::<Vec<i64>>());
    }

    #[test]
    fn test_clean_rejects_fixed_length() {
        let mut chromosome = permutation_of(&[0, 1, 2]);
        assert!(matches!(
            chromosome.clean(),
            Err(GeneticError::InvalidState(_))
        ));

        let genes: Vec<IntGene> = (0..3).map(|v| IntGene::new(v, 0, 9).unwrap()).collect();
        let mut variable = Chromosome::from_genes(genes, false, false);
        variable.clean().unwrap();
        assert!(variable.is_empty());
    }
}
