//! Numeric utilities backing the selection operators: Vose's alias method
//! for O(1) weighted sampling and a polynomial positive-root finder for
//! nonlinear ranking.

pub mod alias;
pub mod polynomial;

pub use alias::AliasSampler;
pub use polynomial::Polynomial;
