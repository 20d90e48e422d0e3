//! Error types for valuation and root solving.
//!
//! Every failure a calculation can produce maps onto one of four kinds, and
//! the transport layer decides status codes from the kind alone.

use std::time::Duration;

use thiserror::Error;

/// Unified error type for all analytics operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticsError {
    /// Invalid input parameter
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No root exists in the searched bracket, or the fallback exhausted its budget.
    #[error("{message}")]
    NoSolution {
        /// Human-readable reason.
        message: String,
        /// Diagnostic residuals, e.g. `npv(low=-0.5)=123.4`.
        details: Vec<String>,
    },

    /// The solver did not return within its wall-clock budget.
    #[error("solver exceeded timeout of {} seconds", .timeout.as_secs())]
    SolverTimeout {
        /// The budget that was exceeded.
        timeout: Duration,
    },

    /// Any other computational failure (overflow, non-finite residual, panic).
    #[error("{0}")]
    SolverError(String),
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Creates a no-solution error with diagnostic details.
    #[must_use]
    pub fn no_solution(message: impl Into<String>, details: Vec<String>) -> Self {
        Self::NoSolution {
            message: message.into(),
            details,
        }
    }

    /// Creates a solver error.
    #[must_use]
    pub fn solver_error(message: impl Into<String>) -> Self {
        Self::SolverError(message.into())
    }

    /// Returns true if the failure is deterministic in the caller's input.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::NoSolution { .. })
    }
}

impl From<fincalc_core::CoreError> for AnalyticsError {
    fn from(err: fincalc_core::CoreError) -> Self {
        AnalyticsError::InvalidInput(err.to_string())
    }
}

impl From<fincalc_math::MathError> for AnalyticsError {
    fn from(err: fincalc_math::MathError) -> Self {
        AnalyticsError::SolverError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincalc_core::CoreError;
    use fincalc_math::MathError;

    #[test]
    fn test_no_solution_display_is_message() {
        let err = AnalyticsError::no_solution("No root here.", vec!["pv(low=0.0)=1.0".into()]);
        assert_eq!(err.to_string(), "No root here.");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_timeout_display() {
        let err = AnalyticsError::SolverTimeout {
            timeout: Duration::from_secs(5),
        };
        assert_eq!(err.to_string(), "solver exceeded timeout of 5 seconds");
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_conversions() {
        let core: AnalyticsError = CoreError::invalid_date("Cannot parse: x").into();
        assert!(matches!(core, AnalyticsError::InvalidInput(_)));

        let math: AnalyticsError = MathError::non_finite(-1.0, f64::NAN).into();
        assert!(matches!(math, AnalyticsError::SolverError(_)));
    }
}
