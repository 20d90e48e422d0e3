//! Rate brackets and the pre-solve sign check.

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::valuation::Valuation;

/// Absolute residual below which a bracket endpoint is itself the root.
pub const BOUNDARY_EPSILON: f64 = 1e-9;

/// A `(low, high)` pair of rate bounds with `low < high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    low: f64,
    high: f64,
}

impl Bracket {
    /// Bond yields are searched in `[0, 1]`.
    pub const BOND_YIELD: Bracket = Bracket {
        low: 0.0,
        high: 1.0,
    };

    /// Default XIRR search range.
    pub const XIRR_WIDE: Bracket = Bracket {
        low: -0.99,
        high: 10.0,
    };

    /// XIRR search range when the caller expects a rate in `(0, 1)`.
    pub const XIRR_NARROW: Bracket = Bracket {
        low: -0.5,
        high: 2.0,
    };

    /// Creates a bracket.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidInput` unless both bounds are finite and `low < high`.
    pub fn new(low: f64, high: f64) -> AnalyticsResult<Self> {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(AnalyticsError::invalid_input(format!(
                "bracket bounds must be finite with low < high, got [{low}, {high}]"
            )));
        }
        Ok(Self { low, high })
    }

    /// Picks the XIRR bracket for a caller's initial guess.
    #[must_use]
    pub fn for_xirr(initial_guess: f64) -> Self {
        if initial_guess > 0.0 && initial_guess < 1.0 {
            Self::XIRR_NARROW
        } else {
            Self::XIRR_WIDE
        }
    }

    /// Lower bound.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }
}

/// Result of evaluating the residual at both ends of a bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BracketCheck {
    /// An endpoint already satisfies `|f| < 1e-9`; no solver needed.
    RootAtBoundary(f64),
    /// The residual changes sign across the bracket.
    SignChange {
        /// Residual at the lower bound.
        f_low: f64,
        /// Residual at the upper bound.
        f_high: f64,
    },
}

/// Decides whether a root is plausible inside `bracket` before any solver runs.
///
/// The lower bound wins when both endpoints are roots.
///
/// # Errors
///
/// - `NoSolution` with both residuals as details when they share a sign.
/// - `SolverError` when either residual is NaN or infinite.
pub fn check_bracket(valuation: &dyn Valuation, bracket: Bracket) -> AnalyticsResult<BracketCheck> {
    let f_low = valuation.residual(bracket.low);
    let f_high = valuation.residual(bracket.high);

    for (rate, value) in [(bracket.low, f_low), (bracket.high, f_high)] {
        if !value.is_finite() {
            return Err(AnalyticsError::solver_error(format!(
                "{}({rate:?}) is not finite",
                valuation.label()
            )));
        }
    }

    if f_low.abs() < BOUNDARY_EPSILON {
        return Ok(BracketCheck::RootAtBoundary(bracket.low));
    }
    if f_high.abs() < BOUNDARY_EPSILON {
        return Ok(BracketCheck::RootAtBoundary(bracket.high));
    }

    if f_low * f_high > 0.0 {
        let label = valuation.label();
        return Err(AnalyticsError::no_solution(
            valuation.no_root_message(),
            vec![
                format!("{label}(low={:?})={f_low:?}", bracket.low),
                format!("{label}(high={:?})={f_high:?}", bracket.high),
            ],
        ));
    }

    Ok(BracketCheck::SignChange { f_low, f_high })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Linear {
        root: f64,
    }

    impl Valuation for Linear {
        fn residual(&self, rate: f64) -> f64 {
            self.root - rate
        }

        fn label(&self) -> &'static str {
            "f"
        }

        fn no_root_message(&self) -> &'static str {
            "no root"
        }
    }

    #[test]
    fn test_sign_change_accepted() {
        let check = check_bracket(&Linear { root: 0.3 }, Bracket::BOND_YIELD).unwrap();
        assert!(matches!(check, BracketCheck::SignChange { f_low, f_high } if f_low > 0.0 && f_high < 0.0));
    }

    #[test]
    fn test_root_at_low_boundary() {
        let check = check_bracket(&Linear { root: 0.0 }, Bracket::BOND_YIELD).unwrap();
        assert_eq!(check, BracketCheck::RootAtBoundary(0.0));
    }

    #[test]
    fn test_root_at_high_boundary() {
        let check = check_bracket(&Linear { root: 1.0 + 1e-12 }, Bracket::BOND_YIELD).unwrap();
        assert_eq!(check, BracketCheck::RootAtBoundary(1.0));
    }

    #[test]
    fn test_same_sign_is_no_solution_with_details() {
        let err = check_bracket(&Linear { root: 2.0 }, Bracket::BOND_YIELD).unwrap_err();
        match err {
            AnalyticsError::NoSolution { message, details } => {
                assert_eq!(message, "no root");
                assert_eq!(details, vec!["f(low=0.0)=2.0", "f(high=1.0)=1.0"]);
            }
            other => panic!("expected NoSolution, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_residual() {
        struct Broken;
        impl Valuation for Broken {
            fn residual(&self, _rate: f64) -> f64 {
                f64::NAN
            }
            fn label(&self) -> &'static str {
                "f"
            }
            fn no_root_message(&self) -> &'static str {
                "no root"
            }
        }

        let err = check_bracket(&Broken, Bracket::XIRR_WIDE).unwrap_err();
        assert!(matches!(err, AnalyticsError::SolverError(_)));
    }

    #[test]
    fn test_xirr_bracket_selection() {
        assert_eq!(Bracket::for_xirr(0.1), Bracket::XIRR_NARROW);
        assert_eq!(Bracket::for_xirr(0.0), Bracket::XIRR_WIDE);
        assert_eq!(Bracket::for_xirr(1.0), Bracket::XIRR_WIDE);
        assert_eq!(Bracket::for_xirr(-0.2), Bracket::XIRR_WIDE);
    }

    #[test]
    fn test_bracket_new_validates() {
        assert!(Bracket::new(0.0, 1.0).is_ok());
        assert!(Bracket::new(1.0, 1.0).is_err());
        assert!(Bracket::new(f64::NAN, 1.0).is_err());
    }
}
