//! Per-generation snapshot of the evolution's progress.

/// A read-only snapshot produced by the engine once per generation and
/// consumed by terminate conditions and observers.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusInfo {
    /// Completed generations (1 after the first evaluation pass).
    pub generations: u64,
    /// Cumulative fitness-function invocations.
    pub evaluations: u64,
    /// Best altered fitness in the current generation.
    pub best_fitness: f64,
    /// Mean altered fitness in the current generation.
    pub average_fitness: f64,
    /// Best raw (pre-transform) fitness in the current generation.
    pub best_raw_fitness: f64,
    /// Mean raw fitness in the current generation.
    pub average_raw_fitness: f64,
    /// Cumulative chromosomes produced by crossover.
    pub crossovers: u64,
    /// Cumulative genes mutated.
    pub mutated_genes: u64,
}

impl Default for StatusInfo {
    fn default() -> Self {
        Self {
            generations: 0,
            evaluations: 0,
            best_fitness: 0.0,
            average_fitness: 0.0,
            best_raw_fitness: 0.0,
            average_raw_fitness: 0.0,
            crossovers: 0,
            mutated_genes: 0,
        }
    }
}
