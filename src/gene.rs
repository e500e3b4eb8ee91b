//! # Gene Trait and Built-in Gene Types
//!
//! A gene is the smallest mutable unit of a candidate solution. The [`Gene`]
//! trait defines how a gene randomizes and mutates itself; the built-in types
//! cover boolean flags ([`BoolGene`]) and bounded scalars ([`IntGene`],
//! [`FloatGene`]).
//!
//! Gene equality is value-based and independent of bounds, so
//! permutation-oriented algorithms (ordered crossover, partially-mapped
//! crossover, swap mutation) can compare genes by the symbol they carry.
//!
//! ## Example
//!
//! ```rust
//! use allele::gene::{Gene, IntGene};
//! use allele::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let mut gene = IntGene::new(3, 0, 10).unwrap();
//! gene.randomize(&mut rng);
//! assert!((0..=10).contains(&gene.value()));
//! ```

use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Trait for types that represent a single gene in a chromosome.
///
/// Types implementing this trait must also implement `Clone`, `Debug`,
/// `PartialEq`, `Send`, and `Sync` so chromosomes can be deep-copied,
/// compared by value and evaluated in parallel.
pub trait Gene: Clone + Debug + PartialEq + Send + Sync {
    /// Draws a fresh value uniformly from the gene's domain.
    fn randomize(&mut self, rng: &mut RandomNumberGenerator);

    /// Perturbs the gene's value.
    ///
    /// The default implementation redraws the value via [`Gene::randomize`].
    /// Gene types with a cheaper or more meaningful perturbation (e.g. a
    /// boolean flip) override this.
    fn mutate(&mut self, rng: &mut RandomNumberGenerator) {
        self.randomize(rng);
    }
}

/// A boolean-valued gene.
///
/// Randomization is a 50/50 draw; mutation flips the value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct BoolGene {
    value: bool,
}

impl BoolGene {
    /// Creates a new `BoolGene` holding the given value.
    pub fn new(value: bool) -> Self {
        Self { value }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn set_value(&mut self, value: bool) {
        self.value = value;
    }
}

impl Gene for BoolGene {
    fn randomize(&mut self, rng: &mut RandomNumberGenerator) {
        self.value = rng.gen_bool(0.5);
    }

    fn mutate(&mut self, _rng: &mut RandomNumberGenerator) {
        self.value = !self.value;
    }
}

/// An integer-valued gene constrained to an inclusive `[min, max]` range.
///
/// Mutation redraws the value uniformly from the range rather than applying
/// a bounded perturbation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Eq)]
pub struct IntGene {
    value: i64,
    min: i64,
    max: i64,
}

// Hashing mirrors the value-based equality below; bounds are excluded from
// both.
impl std::hash::Hash for IntGene {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl IntGene {
    /// Creates a new `IntGene` with the given value and inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` error if `min > max`, or a
    /// `GeneticError::Constraint` error if `value` lies outside the bounds.
    pub fn new(value: i64, min: i64, max: i64) -> Result<Self> {
        if min > max {
            return Err(GeneticError::Configuration(format!(
                "Invalid gene bounds: min ({}) is greater than max ({})",
                min, max
            )));
        }
        if value < min || value > max {
            return Err(GeneticError::Constraint(format!(
                "Gene value {} is outside the declared bounds [{}, {}]",
                value, min, max
            )));
        }
        Ok(Self { value, min, max })
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Sets the gene's value, validating it against the declared bounds.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Constraint` error if `value` lies outside
    /// `[min, max]`.
    pub fn set_value(&mut self, value: i64) -> Result<()> {
        if value < self.min || value > self.max {
            return Err(GeneticError::Constraint(format!(
                "Gene value {} is outside the declared bounds [{}, {}]",
                value, self.min, self.max
            )));
        }
        self.value = value;
        Ok(())
    }
}

// Equality is value-based so permutation algorithms can match genes by
// symbol regardless of how their ranges were declared.
impl PartialEq for IntGene {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Gene for IntGene {
    fn randomize(&mut self, rng: &mut RandomNumberGenerator) {
        self.value = rng.gen_range(self.min..=self.max);
    }
}

/// A float-valued gene constrained to an inclusive `[min, max]` range.
///
/// Mutation redraws the value uniformly from the range rather than applying
/// a bounded perturbation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct FloatGene {
    value: f64,
    min: f64,
    max: f64,
}

impl FloatGene {
    /// Creates a new `FloatGene` with the given value and inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` error if the bounds are not
    /// finite or `min > max`, or a `GeneticError::Constraint` error if
    /// `value` lies outside the bounds.
    pub fn new(value: f64, min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(GeneticError::Configuration(format!(
                "Invalid gene bounds: [{}, {}]",
                min, max
            )));
        }
        if value < min || value > max {
            return Err(GeneticError::Constraint(format!(
                "Gene value {} is outside the declared bounds [{}, {}]",
                value, min, max
            )));
        }
        Ok(Self { value, min, max })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Sets the gene's value, validating it against the declared bounds.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Constraint` error if `value` lies outside
    /// `[min, max]`.
    pub fn set_value(&mut self, value: f64) -> Result<()> {
        if value < self.min || value > self.max {
            return Err(GeneticError::Constraint(format!(
                "Gene value {} is outside the declared bounds [{}, {}]",
                value, self.min, self.max
            )));
        }
        self.value = value;
        Ok(())
    }
}

impl PartialEq for FloatGene {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Gene for FloatGene {
    fn randomize(&mut self, rng: &mut RandomNumberGenerator) {
        self.value = rng.gen_range(self.min..=self.max);
    }
}
