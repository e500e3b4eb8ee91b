//! Half-uniform crossover: exactly half of the differing positions are
//! exchanged.

use crate::chromosome::Chromosome;
use crate::crossover::{check_order_breaking, CrossoverOperator};
use crate::error::Result;
use crate::gene::Gene;
use crate::rng::RandomNumberGenerator;

/// Collects every position where the parents differ, shuffles that list and
/// swaps the first half of it.
///
/// Where plain uniform crossover swaps a binomially distributed number of
/// positions, half-uniform fixes the exchanged Hamming distance at `d / 2`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default)]
pub struct HalfUniformCrossover;

impl HalfUniformCrossover {
    pub fn new() -> Self {
        Self
    }
}

impl<G: Gene> CrossoverOperator<G> for HalfUniformCrossover {
    fn cross(
        &self,
        first: &mut Chromosome<G>,
        second: &mut Chromosome<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        check_order_breaking(first, second)?;

        let mut genes_first = first.genes().to_vec();
        let mut genes_second = second.genes().to_vec();

        let mut differing: Vec<usize> = (0..genes_first.len())
            .filter(|&index| genes_first[index] != genes_second[index])
            .collect();
        rng.shuffle(&mut differing);

        for &index in differing.iter().take(differing.len() / 2) {
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
    use crate::gene::BoolGene;

    fn chromosome_of(bits: &[bool]) -> Chromosome<BoolGene> {
        let genes = bits.iter().map(|&b| BoolGene::new(b)).collect();
        Chromosome::from_genes(genes, false, true)
    }

    #[test]
    fn test_swaps_exactly_half_of_differing_positions() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut first = chromosome_of(&[true; 10]);
        let mut second = chromosome_of(&[false; 10]);

        HalfUniformCrossover::new()
            .cross(&mut first, &mut second, &mut rng)
            .unwrap();

        let swapped = first.genes().iter().filter(|g| !g.value()).count();
        assert_eq!(swapped, 5);
        let swapped_back = second.genes().iter().filter(|g| g.value()).count();
        assert_eq!(swapped_back, 5);
    }

    #[test]
    fn test_agreeing_positions_untouched() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        // Parents agree everywhere except positions 1 and 3
        let mut first = chromosome_of(&[true, true, false, true]);
        let mut second = chromosome_of(&[true, false, false, false]);

        HalfUniformCrossover::new()
            .cross(&mut first, &mut second, &mut rng)
            .unwrap();

        assert!(first.genes()[0].value());
        assert!(!first.genes()[2].value());
        assert!(second.genes()[0].value());
        assert!(!second.genes()[2].value());
    }

    #[test]
    fn test_identical_parents_unchanged() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let bits = [true, false, true];
        let mut first = chromosome_of(&bits);
        let mut second = chromosome_of(&bits);

        HalfUniformCrossover::new()
            .cross(&mut first, &mut second, &mut rng)
            .unwrap();

        for index in 0..3 {
            assert_eq!(first.genes()[index].value(), bits[index]);
        }
    }
}
