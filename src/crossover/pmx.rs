//! Partially-mapped crossover (PMX) for permutation chromosomes.

use crate::chromosome::Chromosome;
use crate::crossover::{check_permutation, random_span, CrossoverOperator};
use crate::error::{GeneticError, Result};
use crate::gene::Gene;
use crate::rng::RandomNumberGenerator;

/// Partially-mapped crossover over a random `[start, end]` sub-range.
///
/// Positions inside the sub-range are copied from parent B. A position
/// outside it takes parent A's value directly when that value does not
/// appear in B's sub-range; otherwise the mapping chain is followed: find
/// where the value sits in B's sub-range, take A's value at that position,
/// and repeat until landing on a value absent from B's sub-range. The second
/// child is produced symmetrically with the parents' roles swapped.
///
/// Each child is a permutation of the same value set as its parents: no
/// symbol is duplicated or dropped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default)]
pub struct PartiallyMappedCrossover;

impl PartiallyMappedCrossover {
    pub fn new() -> Self {
        Self
    }
}

pub(crate) fn pmx_child<G: Gene>(
    a: &[G],
    b: &[G],
    start: usize,
    end: usize,
) -> Result<Vec<G>> {
    let n = a.len();
    let mut child = a.to_vec();
    child[start..=end].clone_from_slice(&b[start..=end]);

    for index in (0..start).chain(end + 1..n) {
        let mut value = &a[index];
        let mut hops = 0;
        while let Some(mapped) = (start..=end).find(|&j| b[j] == *value) {
            value = &a[mapped];
            hops += 1;
            if hops > n {
                // Only possible when a parent repeats a symbol
                return Err(GeneticError::Crossover(
                    "Mapping chain did not terminate; parents are not permutations"
                        .to_string(),
                ));
            }
        }
        child[index] = value.clone();
    }
    Ok(child)
}

impl<G: Gene> CrossoverOperator<G> for PartiallyMappedCrossover {
    fn cross(
        &self,
        first: &mut Chromosome<G>,
        second: &mut Chromosome<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        check_permutation(first, second)?;

        let (start, end) = random_span(first.len(), rng);
        let child_first = pmx_child(first.genes(), second.genes(), start, end)?;
        let child_second = pmx_child(second.genes(), first.genes(), start, end)?;

        first.install_genes(child_first);
        second.install_genes(child_second);
        Ok(())
    }
}
