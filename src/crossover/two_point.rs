//! Two-point crossover: the parents exchange one random interior span.

use crate::chromosome::Chromosome;
use crate::crossover::{check_order_breaking, random_span, CrossoverOperator};
use crate::error::Result;
use crate::gene::Gene;
use crate::rng::RandomNumberGenerator;

/// Draws a random `[start, end]` span and swaps it between the parents.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default)]
pub struct TwoPointCrossover;

impl TwoPointCrossover {
    pub fn new() -> Self {
        Self
    }
}

impl<G: Gene> CrossoverOperator<G> for TwoPointCrossover {
    fn cross(
        &self,
        first: &mut Chromosome<G>,
        second: &mut Chromosome<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        check_order_breaking(first, second)?;

        let (start, end) = random_span(first.len(), rng);
        let mut genes_first = first.genes().to_vec();
        let mut genes_second = second.genes().to_vec();
        for index in start..=end {
            std::mem::swap(&mut genes_first[index], &mut genes_second[index]);
        }

        first.install_genes(genes_first);
        second.install_genes(genes_second);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gene::IntGene;

    fn chromosome_of(values: &[i64]) -> Chromosome<IntGene> {
        let genes = values
            .iter()
            .map(|&v| IntGene::new(v, 0, 100).unwrap())
            .collect();
        Chromosome::from_genes(genes, false, true)
    }

    fn values(chromosome: &Chromosome<IntGene>) -> Vec<i64> {
        chromosome.genes().iter().map(|g| g.value()).collect()
    }

    #[test]
    fn test_exactly_one_span_is_exchanged() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut first = chromosome_of(&[1; 8]);
        let mut second = chromosome_of(&[2; 8]);

        TwoPointCrossover::new()
            .cross(&mut first, &mut second, &mut rng)
            .unwrap();

        let a = values(&first);
        // The swapped region is contiguous: at most two switch points
        let switches = a.windows(2).filter(|w| w[0] != w[1]).count();
        assert!(switches <= 2);
        // Positions always hold complementary values
        let b = values(&second);
        for index in 0..8 {
            assert_eq!(a[index] + b[index], 3);
        }
    }

    #[test]
    fn test_combined_multiset_is_preserved() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let mut first = chromosome_of(&[1, 2, 3, 4, 5]);
        let mut second = chromosome_of(&[6, 7, 8, 9, 10]);

        TwoPointCrossover::new()
            .cross(&mut first, &mut second, &mut rng)
            .unwrap();

        let mut combined = values(&first);
        combined.extend(values(&second));
        combined.sort_unstable();
        assert_eq!(combined, (1..=10).collect::<Vec<i64>>());
    }
}
