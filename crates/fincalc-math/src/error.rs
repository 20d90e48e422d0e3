//! Error types for root-finding.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while searching for a root.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Root-finding algorithm failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Absolute residual at the best estimate.
        residual: f64,
        /// Point the algorithm would have returned next.
        best_estimate: f64,
    },

    /// Invalid bracket for root-finding.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have same sign")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// The function returned NaN or infinity.
    #[error("Non-finite function value at x = {x}: {value}")]
    NonFiniteValue {
        /// Evaluation point.
        x: f64,
        /// The value returned.
        value: f64,
    },

    /// Division by zero or near-zero value.
    #[error("Division by zero or near-zero value: {value:.2e}")]
    DivisionByZero {
        /// The near-zero value.
        value: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64, best_estimate: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
            best_estimate,
        }
    }

    /// Creates a non-finite value error.
    #[must_use]
    pub fn non_finite(x: f64, value: f64) -> Self {
        Self::NonFiniteValue { x, value }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::convergence_failed(100, 1e-6, 0.5);
        assert!(err.to_string().contains("100 iterations"));
    }

    #[test]
    fn test_non_finite_display() {
        let err = MathError::non_finite(-1.0, f64::INFINITY);
        assert_eq!(err.to_string(), "Non-finite function value at x = -1: inf");
    }
}
