//! Ordered crossover (OX) for permutation chromosomes.

use crate::chromosome::Chromosome;
use crate::crossover::{check_permutation, random_span, CrossoverOperator};
use crate::error::Result;
use crate::gene::Gene;
use crate::rng::RandomNumberGenerator;

/// Ordered crossover over a random `[start, end]` sub-range.
///
/// The child keeps parent A's sub-range verbatim. The remaining positions
/// are filled by scanning parent B cyclically, starting immediately after
/// `end`, skipping any value already present in the copied sub-range; the
/// accepted values are written starting at `end + 1`, wrapping to the front
/// once the end of the array is reached. The second child is produced
/// symmetrically with the parents' roles swapped.
///
/// Each child is a permutation of the same value set as its parents: no
/// symbol is duplicated or dropped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default)]
pub struct OrderedCrossover;

impl OrderedCrossover {
    pub fn new() -> Self {
        Self
    }
}

pub(crate) fn ox_child<G: Gene>(a: &[G], b: &[G], start: usize, end: usize) -> Vec<G> {
    let n = a.len();
    let segment = &a[start..=end];

    let mut child = a.to_vec();
    let accepted = (1..=n)
        .map(|offset| &b[(end + offset) % n])
        .filter(|value| !segment.contains(value));
    for (slot, value) in accepted.enumerate() {
        child[(end + 1 + slot) % n] = value.clone();
    }
    child
}

impl<G: Gene> CrossoverOperator<G> for OrderedCrossover {
    fn cross(
        &self,
        first: &mut Chromosome<G>,
        second: &mut Chromosome<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        check_permutation(first, second)?;

        let (start, end) = random_span(first.len(), rng);
        let child_first = ox_child(first.genes(), second.genes(), start, end);
        let child_second = ox_child(second.genes(), first.genes(), start, end);

        first.install_genes(child_first);
        second.install_genes(child_second);
        Ok(())
    }
}
