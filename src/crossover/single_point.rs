//! Single-point crossover: the parents exchange the tails after one random
//! cut point.

use crate::chromosome::Chromosome;
use crate::crossover::{check_order_breaking, CrossoverOperator};
use crate::error::{GeneticError, Result};
use crate::gene::Gene;
use crate::rng::RandomNumberGenerator;

/// Cuts both parents at one random point in `[1, len)` and swaps the tails.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default)]
pub struct SinglePointCrossover;

impl SinglePointCrossover {
    pub fn new() -> Self {
        Self
    }
}

impl<G: Gene> CrossoverOperator<G> for SinglePointCrossover {
    fn cross(
        &self,
        first: &mut Chromosome<G>,
        second: &mut Chromosome<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        check_order_breaking(first, second)?;
        let len = first.len();
        if len < 2 {
            return Err(GeneticError::Crossover(
                "Single-point crossover requires at least two genes".to_string(),
            ));
        }

        let point = rng.gen_range(1..len);
        let mut genes_first = first.genes().to_vec();
        let mut genes_second = second.genes().to_vec();
        for index in point..len {
            std::mem::swap(&mut genes_first[index], &mut genes_second[index]);
        }

        first.install_genes(genes_first);
        second.install_genes(genes_second);
        Ok(())
    }
}
