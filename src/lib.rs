//! # allele
//!
//! A modular evolutionary-optimization engine. Clients supply a gene
//! encoding (a [`chromosome::ChromosomeTemplate`]) and a scoring function (a
//! [`fitness::FitnessFunction`]); the crate supplies the generational loop,
//! the population bookkeeping and a library of interchangeable selection,
//! crossover, mutation and termination strategies.
//!
//! See [`engine::GeneticEngine`] for a complete end-to-end example.

pub mod chromosome;
pub mod crossover;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod gene;
pub mod math;
pub mod mutation;
pub mod population;
pub mod rng;
pub mod selection;
pub mod termination;

// Re-export commonly used types for convenience
pub use chromosome::{Chromosome, ChromosomeTemplate};
pub use engine::{EngineConfig, EvolutionOutcome, GeneticEngine, StatusInfo};
pub use error::{GeneticError, Result};
pub use fitness::{FitnessFunction, FitnessTransform};
pub use gene::Gene;
pub use population::Population;
