//! Extended internal rate of return for irregularly dated cash flows.

use fincalc_core::CashFlowSeries;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::solve::{
    find_rate, multiple_root_warnings, Bracket, CancelFlag, Exhaustion, RootStrategy,
    SolverOutcome,
};
use crate::valuation::XirrValuation;

/// Initial guess used when the caller supplies none.
pub const DEFAULT_INITIAL_GUESS: f64 = 0.1;

/// Reported when bisection runs out of iterations.
pub const ITERATION_LIMIT_MESSAGE: &str = "No XIRR solution found within iteration limit.";

/// Calculate XIRR.
///
/// Elapsed time is ACT/365 Fixed from the earliest date in the series. The
/// bracket is `[-0.5, 2.0]` when `0 < initial_guess < 1` and `[-0.99, 10.0]`
/// otherwise; the guess also seeds the Newton fallback.
///
/// # Errors
///
/// - `InvalidInput` if `initial_guess` is not finite.
/// - `NoSolution` if the NPV does not change sign across the bracket or
///   bisection exhausts its iterations.
/// - `SolverError` for non-finite NPVs, a failed fallback or a set `cancel`.
pub fn xirr(
    strategy: &dyn RootStrategy,
    series: &CashFlowSeries,
    initial_guess: f64,
    cancel: &CancelFlag,
) -> AnalyticsResult<SolverOutcome> {
    let valuation = XirrValuation::new(series);
    solve(strategy, &valuation, initial_guess, cancel)
}

/// Calculate XIRR and attach diagnostics.
///
/// Same rate as [`xirr`]; additionally samples the NPV at fixed rates and
/// warns when it changes sign more than once.
pub fn explain_xirr(
    strategy: &dyn RootStrategy,
    series: &CashFlowSeries,
    initial_guess: f64,
    cancel: &CancelFlag,
) -> AnalyticsResult<SolverOutcome> {
    let valuation = XirrValuation::new(series);
    let warnings = multiple_root_warnings(&valuation);
    solve(strategy, &valuation, initial_guess, cancel)
        .map(|outcome| outcome.with_warnings(warnings))
}

fn solve(
    strategy: &dyn RootStrategy,
    valuation: &XirrValuation,
    initial_guess: f64,
    cancel: &CancelFlag,
) -> AnalyticsResult<SolverOutcome> {
    if !initial_guess.is_finite() {
        return Err(AnalyticsError::invalid_input(format!(
            "initial guess must be finite, got {initial_guess}"
        )));
    }

    find_rate(
        strategy,
        valuation,
        Bracket::for_xirr(initial_guess),
        initial_guess,
        Exhaustion::NoSolution(ITERATION_LIMIT_MESSAGE),
        cancel,
    )
}
