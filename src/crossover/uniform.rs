//! Uniform crossover: each differing position swaps independently with
//! probability one half.

use crate::chromosome::Chromosome;
use crate::crossover::{check_order_breaking, CrossoverOperator};
use crate::error::Result;
use crate::gene::Gene;
use crate::rng::RandomNumberGenerator;

/// Walks both parents position by position; wherever the genes differ, a
/// fair coin decides whether the position is swapped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformCrossover;

impl UniformCrossover {
    pub fn new() -> Self {
        Self
    }
}

impl<G: Gene> CrossoverOperator<G> for UniformCrossover {
    fn cross(
        &self,
        first: &mut Chromosome<G>,
        second: &mut Chromosome<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        check_order_breaking(first, second)?;

        let mut genes_first = first.genes().to_vec();
        let mut genes_second = second.genes().to_vec();
        for index in 0..genes_first.len() {
            if genes_first[index] != genes_second[index] && rng.gen_bool(0.5) {
                std::mem::swap(&mut genes_first[index], &mut genes_second[index]);
            }
        }

        first.install_genes(genes_first);
        second.install_genes(genes_second);
        Ok(())
    }
}
