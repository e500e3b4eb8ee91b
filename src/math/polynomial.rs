//! # Polynomial
//!
//! A dense real polynomial with Horner evaluation and a positive-real-root
//! finder. Nonlinear rank selection uses this to solve for the geometric
//! base of its rank weights.
//!
//! The root finder brackets a sign change on the positive axis and then
//! refines it with Newton steps, falling back to bisection whenever a Newton
//! step would leave the bracket. Failure to locate a root is reported as
//! `GeneticError::NonConvergence`; there is no silent fallback.

use crate::error::{GeneticError, Result};

/// A dense polynomial over `f64`, stored as ascending-power coefficients:
/// `coefficients[k]` multiplies `x^k`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from ascending-power coefficients.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` error if the coefficient list
    /// is empty or contains a non-finite value.
    pub fn new(coefficients: Vec<f64>) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(GeneticError::Configuration(
                "A polynomial requires at least one coefficient".to_string(),
            ));
        }
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(GeneticError::Configuration(
                "Polynomial coefficients must be finite".to_string(),
            ));
        }
        Ok(Self { coefficients })
    }

    /// The polynomial's degree (0 for constants).
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluates the polynomial at `x` with Horner's scheme.
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    /// The formal derivative.
    pub fn derivative(&self) -> Self {
        if self.coefficients.len() == 1 {
            return Self {
                coefficients: vec![0.0],
            };
        }
        let coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(power, &c)| c * power as f64)
            .collect();
        Self { coefficients }
    }

    /// Finds a positive real root.
    ///
    /// Scans outward from zero, doubling the upper end until the polynomial
    /// changes sign, then refines with Newton steps safeguarded by the
    /// bracket: a step that leaves the bracket is replaced by its midpoint.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::NonConvergence` error if no sign change is
    /// found on the positive axis or the refinement does not converge within
    /// `max_iterations`.
    pub fn positive_root(&self, tolerance: f64, max_iterations: usize) -> Result<f64> {
        let derivative = self.derivative();

        let mut lo = 0.0;
        let mut f_lo = self.eval(lo);
        let mut hi = 1.0;
        let mut f_hi = self.eval(hi);

        let mut doublings = 0;
        while f_lo.signum() == f_hi.signum() {
            if f_hi == 0.0 {
                return Ok(hi);
            }
            lo = hi;
            f_lo = f_hi;
            hi *= 2.0;
            f_hi = self.eval(hi);
            doublings += 1;
            if doublings > 128 || !f_hi.is_finite() {
                return Err(GeneticError::NonConvergence(
                    "No sign change found on the positive axis".to_string(),
                ));
            }
        }
        if f_hi == 0.0 {
            return Ok(hi);
        }

        let mut x = 0.5 * (lo + hi);
        for _ in 0..max_iterations {
            let f_x = self.eval(x);
            if f_x == 0.0 {
                return Ok(x);
            }

            if f_x.signum() == f_lo.signum() {
                lo = x;
                f_lo = f_x;
            } else {
                hi = x;
            }

            let slope = derivative.eval(x);
            let mut next = if slope != 0.0 { x - f_x / slope } else { f64::NAN };
            if !next.is_finite() || next <= lo || next >= hi {
                next = 0.5 * (lo + hi);
            }

            if (next - x).abs() <= tolerance * x.abs().max(1.0) {
                return Ok(next);
            }
            x = next;
        }

        Err(GeneticError::NonConvergence(format!(
            "Root refinement did not converge within {} iterations",
            max_iterations
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_horner() {
        // 2 + 3x + x^2
        let p = Polynomial::new(vec![2.0, 3.0, 1.0]).unwrap();
        assert_eq!(p.eval(0.0), 2.0);
        assert_eq!(p.eval(1.0), 6.0);
        assert_eq!(p.eval(2.0), 12.0);
    }

    #[test]
    fn test_derivative() {
        // 5 + 2x + 4x^3  ->  2 + 12x^2
        let p = Polynomial::new(vec![5.0, 2.0, 0.0, 4.0]).unwrap();
        let d = p.derivative();
        assert_eq!(d, Polynomial::new(vec![2.0, 0.0, 12.0]).unwrap());

        let constant = Polynomial::new(vec![7.0]).unwrap();
        assert_eq!(constant.derivative().eval(3.0), 0.0);
    }

    #[test]
    fn test_positive_root_quadratic() {
        // x^2 - 2: positive root is sqrt(2)
        let p = Polynomial::new(vec![-2.0, 0.0, 1.0]).unwrap();
        let root = p.positive_root(1e-12, 100).unwrap();
        assert!((root - 2.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_positive_root_rank_polynomial() {
        // (SP - N) x^(N-1) + SP x^(N-2) + ... + SP with N = 11, SP = 3
        let n = 11;
        let sp = 3.0;
        let mut coefficients = vec![sp; n - 1];
        coefficients.push(sp - n as f64);
        let p = Polynomial::new(coefficients).unwrap();

        let root = p.positive_root(1e-10, 200).unwrap();
        assert!((root - 1.357333).abs() < 1e-5);
    }

    #[test]
    fn test_no_positive_root_reported() {
        // x^2 + 1 has no real root
        let p = Polynomial::new(vec![1.0, 0.0, 1.0]).unwrap();
        assert!(matches!(
            p.positive_root(1e-10, 100),
            Err(GeneticError::NonConvergence(_))
        ));
    }

    #[test]
    fn test_empty_coefficients_rejected() {
        assert!(matches!(
            Polynomial::new(vec![]),
            Err(GeneticError::Configuration(_))
        ));
    }
}
