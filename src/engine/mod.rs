//! # Engine
//!
//! The engine owns one configuration and the current population and drives
//! the generational loop: seed → evaluate → terminate-check → select →
//! crossover → mutate → replace.

pub mod config;
pub mod driver;
pub mod observer;
pub mod status;

pub use config::{EngineConfig, EngineConfigBuilder};
pub use driver::{EvolutionOutcome, GeneticEngine};
pub use observer::EvolutionObserver;
pub use status::StatusInfo;
