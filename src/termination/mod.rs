//! # Termination Conditions
//!
//! A [`TerminateCondition`] decides, from the per-generation [`StatusInfo`]
//! snapshot, whether the evolutionary loop should stop. Conditions compose
//! with [`AnyOf`], which stops on the first child that fires.
//!
//! [`NoImprovement`] and [`AnyOf`] carry mutable state scoped to a single
//! run; construct a fresh instance per run.
//!
//! ## Example
//!
//! ```rust
//! use allele::engine::status::StatusInfo;
//! use allele::termination::{AnyOf, MaxGenerations, TargetFitness, TerminateCondition};
//!
//! let mut condition = AnyOf::new(vec![
//!     Box::new(MaxGenerations::new(500)),
//!     Box::new(TargetFitness::new(0.99)),
//! ]);
//!
//! let status = StatusInfo { generations: 500, ..StatusInfo::default() };
//! assert!(condition.should_stop(&status));
//! ```

use std::fmt::Debug;

use crate::engine::status::StatusInfo;

/// Trait for stop predicates over the per-generation status snapshot.
///
/// `should_stop` takes `&mut self` because some conditions track state
/// across generations (e.g. the stall counter of [`NoImprovement`]).
pub trait TerminateCondition: Debug + Send {
    fn should_stop(&mut self, status: &StatusInfo) -> bool;
}

/// Stops once the generation counter reaches `limit`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct MaxGenerations {
    limit: u64,
}

impl MaxGenerations {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl TerminateCondition for MaxGenerations {
    fn should_stop(&mut self, status: &StatusInfo) -> bool {
        status.generations >= self.limit
    }
}

/// Stops once the cumulative fitness-evaluation counter reaches `limit`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct MaxEvaluations {
    limit: u64,
}

impl MaxEvaluations {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl TerminateCondition for MaxEvaluations {
    fn should_stop(&mut self, status: &StatusInfo) -> bool {
        status.evaluations >= self.limit
    }
}

/// Stops once the best fitness reaches `target`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct TargetFitness {
    target: f64,
}

impl TargetFitness {
    pub fn new(target: f64) -> Self {
        Self { target }
    }
}

impl TerminateCondition for TargetFitness {
    fn should_stop(&mut self, status: &StatusInfo) -> bool {
        status.best_fitness >= self.target
    }
}

/// The metric watched by [`NoImprovement`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackedMetric {
    BestFitness,
    AverageFitness,
}

/// Stops after `patience` consecutive generations without strict improvement
/// of the tracked metric.
///
/// The first observation establishes the baseline; the stall counter resets
/// to zero whenever the metric strictly increases and increments otherwise.
#[derive(Clone, Copy, Debug)]
pub struct NoImprovement {
    metric: TrackedMetric,
    patience: u64,
    best_seen: Option<f64>,
    stalled: u64,
}

impl NoImprovement {
    pub fn new(metric: TrackedMetric, patience: u64) -> Self {
        Self {
            metric,
            patience,
            best_seen: None,
            stalled: 0,
        }
    }
}

impl TerminateCondition for NoImprovement {
    fn should_stop(&mut self, status: &StatusInfo) -> bool {
        let observed = match self.metric {
            TrackedMetric::BestFitness => status.best_fitness,
            TrackedMetric::AverageFitness => status.average_fitness,
        };

        match self.best_seen {
            None => {
                self.best_seen = Some(observed);
                self.stalled = 0;
            }
            Some(best) if observed > best => {
                self.best_seen = Some(observed);
                self.stalled = 0;
            }
            Some(_) => {
                self.stalled += 1;
            }
        }

        self.stalled >= self.patience
    }
}

/// Composes child conditions; stops on the first that fires.
///
/// Children are evaluated in registration order and evaluation
/// short-circuits, so later children may not observe every generation.
#[derive(Debug)]
pub struct AnyOf {
    conditions: Vec<Box<dyn TerminateCondition>>,
}

impl AnyOf {
    pub fn new(conditions: Vec<Box<dyn TerminateCondition>>) -> Self {
        Self { conditions }
    }

    /// Appends a child condition, evaluated after the existing ones.
    pub fn push(&mut self, condition: Box<dyn TerminateCondition>) {
        self.conditions.push(condition);
    }
}

impl TerminateCondition for AnyOf {
    fn should_stop(&mut self, status: &StatusInfo) -> bool {
        self.conditions
            .iter_mut()
            .any(|condition| condition.should_stop(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_with(generations: u64, evaluations: u64, best: f64, average: f64) -> StatusInfo {
        StatusInfo {
            generations,
            evaluations,
            best_fitness: best,
            average_fitness: average,
            ..StatusInfo::default()
        }
    }

    #[test]
    fn test_max_generations_fires_exactly_at_limit() {
        let mut condition = MaxGenerations::new(10);
        assert!(!condition.should_stop(&status_with(9, 0, 0.0, 0.0)));
        assert!(condition.should_stop(&status_with(10, 0, 0.0, 0.0)));
    }

    #[test]
    fn test_max_evaluations() {
        let mut condition = MaxEvaluations::new(1000);
        assert!(!condition.should_stop(&status_with(1, 999, 0.0, 0.0)));
        assert!(condition.should_stop(&status_with(1, 1000, 0.0, 0.0)));
    }

    #[test]
    fn test_target_fitness() {
        let mut condition = TargetFitness::new(5.0);
        assert!(!condition.should_stop(&status_with(1, 0, 4.9, 0.0)));
        assert!(condition.should_stop(&status_with(1, 0, 5.0, 0.0)));
    }

    #[test]
    fn test_no_improvement_counts_stalled_generations() {
        let mut condition = NoImprovement::new(TrackedMetric::BestFitness, 3);

        // Baseline
        assert!(!condition.should_stop(&status_with(1, 0, 10.0, 0.0)));
        // Three flat generations in a row
        assert!(!condition.should_stop(&status_with(2, 0, 10.0, 0.0)));
        assert!(!condition.should_stop(&status_with(3, 0, 10.0, 0.0)));
        assert!(condition.should_stop(&status_with(4, 0, 10.0, 0.0)));
    }

    #[test]
    fn test_no_improvement_resets_on_strict_increase() {
        let mut condition = NoImprovement::new(TrackedMetric::BestFitness, 2);

        assert!(!condition.should_stop(&status_with(1, 0, 10.0, 0.0)));
        assert!(!condition.should_stop(&status_with(2, 0, 10.0, 0.0)));
        // Improvement resets the counter
        assert!(!condition.should_stop(&status_with(3, 0, 11.0, 0.0)));
        assert!(!condition.should_stop(&status_with(4, 0, 11.0, 0.0)));
        assert!(condition.should_stop(&status_with(5, 0, 11.0, 0.0)));
    }

    #[test]
    fn test_no_improvement_tracks_average_metric() {
        let mut condition = NoImprovement::new(TrackedMetric::AverageFitness, 1);

        assert!(!condition.should_stop(&status_with(1, 0, 0.0, 3.0)));
        // Best improves but the tracked average does not
        assert!(condition.should_stop(&status_with(2, 0, 100.0, 3.0)));
    }

    #[test]
    fn test_any_of_short_circuits() {
        #[derive(Debug)]
        struct CountingCondition {
            calls: u64,
            fire: bool,
        }

        impl TerminateCondition for CountingCondition {
            fn should_stop(&mut self, _status: &StatusInfo) -> bool {
                self.calls += 1;
                self.fire
            }
        }

        let mut composite = AnyOf::new(vec![
            Box::new(CountingCondition {
                calls: 0,
                fire: true,
            }),
            Box::new(CountingCondition {
                calls: 0,
                fire: false,
            }),
        ]);

        assert!(composite.should_stop(&status_with(1, 0, 0.0, 0.0)));
        // The second child was never consulted: registration order wins
    }

    #[test]
    fn test_any_of_fires_on_any_child() {
        let mut composite = AnyOf::new(vec![
            Box::new(MaxGenerations::new(100)),
            Box::new(TargetFitness::new(1.0)),
        ]);

        assert!(!composite.should_stop(&status_with(1, 0, 0.5, 0.0)));
        assert!(composite.should_stop(&status_with(2, 0, 1.0, 0.0)));
    }
}
