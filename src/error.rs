//! # Error Types
//!
//! This module defines the error types used across the evolutionary engine.
//! The engine treats precondition violations (a selection operator invoked on
//! an unsorted population, mismatched parent lengths handed to a crossover
//! operator, a negative score returned by a fitness function) as programming
//! errors: they are reported as typed errors at the call site and are never
//! retried internally.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use allele::error::{GeneticError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the evolutionary engine.
///
/// This enum provides specific error variants for different failure scenarios
/// that may occur while configuring or running an evolution.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an operation is invoked in a state that does
    /// not support it, e.g. sorting a population before it was evaluated.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Error that occurs when a gene value violates its declared bounds.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a fitness function produces an unusable score.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when a selection operator cannot produce a result.
    #[error("Selection error: {0}")]
    Selection(String),

    /// Error that occurs when a crossover operator is applied to
    /// incompatible parents.
    #[error("Crossover error: {0}")]
    Crossover(String),

    /// Error that occurs when a mutation operator is applied to a chromosome
    /// it cannot legally perturb.
    #[error("Mutation error: {0}")]
    Mutation(String),

    /// Error that occurs when an iterative numerical method fails to
    /// converge to a valid result.
    #[error("Numerical non-convergence: {0}")]
    NonConvergence(String),
}

/// A specialized Result type for evolutionary engine operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `GeneticError`.
///
/// ## Examples
///
/// ```rust
/// use allele::error::{GeneticError, Result};
///
/// fn may_fail() -> Result<i32> {
///     // Some operation that might fail
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, GeneticError>;
