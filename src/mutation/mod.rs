//! # Mutation Operators
//!
//! A mutation operator perturbs a single gene of a chromosome. The engine
//! walks every gene position with the configured per-gene probability and
//! invokes the operator on the positions that trip
//! (see [`Chromosome::mutate`](crate::chromosome::Chromosome::mutate)).
//!
//! [`UniformMutation`] redraws the targeted gene and therefore cannot be
//! applied to permutation chromosomes; [`SwapMutation`] exchanges the
//! targeted gene with another position of the same chromosome, which is the
//! only strategy here that both perturbs a permutation and preserves its
//! value multiset.

use std::fmt::Debug;

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::gene::Gene;
use crate::rng::RandomNumberGenerator;

/// Trait for mutation strategies.
pub trait MutationOperator<G>: Debug + Send
where
    G: Gene,
{
    /// Perturbs the gene at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the chromosome's structure forbids this strategy
    /// or `index` is out of range.
    fn mutate_gene(
        &self,
        chromosome: &mut Chromosome<G>,
        index: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()>;
}

/// Redraws the targeted gene via [`Gene::mutate`].
///
/// For boolean genes this flips the value; for bounded scalar genes it
/// redraws uniformly from the gene's range.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformMutation;

impl UniformMutation {
    pub fn new() -> Self {
        Self
    }
}

impl<G: Gene> MutationOperator<G> for UniformMutation {
    fn mutate_gene(
        &self,
        chromosome: &mut Chromosome<G>,
        index: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        if chromosome.is_permutation() {
            return Err(GeneticError::Mutation(
                "Uniform mutation would break a permutation chromosome; use swap mutation"
                    .to_string(),
            ));
        }
        let gene = chromosome.gene_mut(index).ok_or_else(|| {
            GeneticError::Mutation(format!("Gene index {} is out of range", index))
        })?;
        gene.mutate(rng);
        Ok(())
    }
}

/// Exchanges the targeted gene with another gene at a uniformly chosen index
/// of the same chromosome.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default)]
pub struct SwapMutation;

impl SwapMutation {
    pub fn new() -> Self {
        Self
    }
}

impl<G: Gene> MutationOperator<G> for SwapMutation {
    fn mutate_gene(
        &self,
        chromosome: &mut Chromosome<G>,
        index: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        if index >= chromosome.len() {
            return Err(GeneticError::Mutation(format!(
                "Gene index {} is out of range",
                index
            )));
        }
        let other = rng.index(chromosome.len());
        chromosome.swap_genes(index, other);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gene::IntGene;

    fn chromosome_of(values: &[i64], permutation: bool) -> Chromosome<IntGene> {
        let genes = values
            .iter()
            .map(|&v| IntGene::new(v, 0, 9).unwrap())
            .collect();
        Chromosome::from_genes(genes, permutation, true)
    }

    #[test]
    fn test_uniform_mutation_rejects_permutation() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut chromosome = chromosome_of(&[0, 1, 2], true);

        let result = UniformMutation::new().mutate_gene(&mut chromosome, 0, &mut rng);
        assert!(matches!(result, Err(GeneticError::Mutation(_))));
    }

    #[test]
    fn test_uniform_mutation_redraws_in_bounds() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let mut chromosome = chromosome_of(&[5], false);

        UniformMutation::new()
            .mutate_gene(&mut chromosome, 0, &mut rng)
            .unwrap();
        assert!((0..=9).contains(&chromosome.genes()[0].value()));
    }

    #[test]
    fn test_uniform_mutation_out_of_range_index() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let mut chromosome = chromosome_of(&[5], false);

        let result = UniformMutation::new().mutate_gene(&mut chromosome, 7, &mut rng);
        assert!(matches!(result, Err(GeneticError::Mutation(_))));
    }

    #[test]
    fn test_swap_mutation_preserves_multiset() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let mut chromosome = chromosome_of(&[0, 1, 2, 3, 4, 5], true);

        for index in 0..6 {
            SwapMutation::new()
                .mutate_gene(&mut chromosome, index, &mut rng)
                .unwrap();
        }

        let mut values: Vec<i64> = chromosome.genes().iter().map(|g| g.value()).collect();
        values.sort_unstable();
        assert_eq!(values, (0..6).collect::<Vec<i64>>());
    }
}
