//! # Selection Operators
//!
//! Selection operators choose chromosomes from a population to become
//! parents of the next generation. Each strategy trades off selection
//! pressure against diversity differently; all of them are interchangeable
//! behind the [`SelectionOperator`] trait.
//!
//! The engine calls [`SelectionOperator::prepare`] once per generation
//! (after sorting, when [`SelectionOperator::needs_sorted`] demands it) so
//! strategies can precompute their sampling tables, then calls
//! [`SelectionOperator::select_pair`] once per mating event.
//!
//! Elitism is a separate concern: [`EliteSelection`] clones the top-K
//! chromosomes wholesale rather than producing parent pairs, so it exposes
//! [`EliteSelection::select_many`] instead of implementing this trait.

pub mod elite;
pub mod rank;
pub mod rank_nonlinear;
pub mod roulette;
pub mod sus;
pub mod tournament;
pub mod truncation;

use std::fmt::Debug;

use crate::chromosome::Chromosome;
use crate::engine::status::StatusInfo;
use crate::error::Result;
use crate::gene::Gene;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

/// Trait for parent-selection strategies.
///
/// The engine always requests two parents per mating event; a strategy may
/// return the same chromosome twice.
pub trait SelectionOperator<G>: Debug + Send
where
    G: Gene,
{
    /// Whether this strategy requires the population to be sorted descending
    /// by fitness before [`SelectionOperator::prepare`] is called.
    fn needs_sorted(&self) -> bool {
        false
    }

    /// Per-generation precomputation, e.g. building an alias table over the
    /// current fitness values.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is not in the state the strategy
    /// requires (unevaluated, unsorted) or if precomputation fails.
    fn prepare(
        &mut self,
        status: &StatusInfo,
        population: &Population<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let _ = (status, population, rng);
        Ok(())
    }

    /// Selects two parents, cloned out of the population.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty or the strategy's
    /// preparation has not run for this population.
    fn select_pair(
        &self,
        population: &Population<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome<G>, Chromosome<G>)>;
}

pub use elite::EliteSelection;
pub use rank::LinearRankSelection;
pub use rank_nonlinear::NonLinearRankSelection;
pub use roulette::RouletteWheelSelection;
pub use sus::StochasticUniversalSampling;
pub use tournament::TournamentSelection;
pub use truncation::TruncationSelection;
