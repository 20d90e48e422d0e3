//! Bond pricing and yield to maturity.
//!
//! Provides:
//! - Price at a given yield (closed form, no solver)
//! - Yield to maturity for a market price (bracketed root solve in `[0, 1]`)

use fincalc_core::BondTerms;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::solve::{find_rate, Bracket, CancelFlag, Exhaustion, RootStrategy, SolverOutcome};
use crate::valuation::BondValuation;

/// Starting point of the Newton fallback for bond yields.
pub const FALLBACK_SEED: f64 = 0.05;

/// Calculate the price of a bond at a yield.
///
/// # Formula
///
/// ```text
/// P = Σ_{i=1..N} c / (1 + y/m)^i + F / (1 + y/m)^N
/// ```
///
/// where `c` is the periodic coupon, `m` the payments per year and
/// `N = floor(years * m)`.
#[must_use]
pub fn price_at_yield(terms: &BondTerms, yield_rate: f64) -> f64 {
    BondValuation::new(terms, 0.0).price_at(yield_rate)
}

/// Calculate yield to maturity from a market price.
///
/// The search is restricted to `[0, 1]`. If the bisection fallback runs out
/// of iterations the midpoint of its final bracket is returned rather than an
/// error.
///
/// # Errors
///
/// - `InvalidInput` if `current_price` is not a positive finite number.
/// - `NoSolution` if the price implies a yield outside `[0, 1]`.
/// - `SolverError` if the fast path and its fallback both fail, or `cancel`
///   was set.
pub fn yield_to_maturity(
    strategy: &dyn RootStrategy,
    terms: &BondTerms,
    current_price: f64,
    cancel: &CancelFlag,
) -> AnalyticsResult<SolverOutcome> {
    if !(current_price.is_finite() && current_price > 0.0) {
        return Err(AnalyticsError::invalid_input(format!(
            "current price must be positive, got {current_price}"
        )));
    }

    let valuation = BondValuation::new(terms, current_price);
    find_rate(
        strategy,
        &valuation,
        Bracket::BOND_YIELD,
        FALLBACK_SEED,
        Exhaustion::BestEstimate,
        cancel,
    )
}
