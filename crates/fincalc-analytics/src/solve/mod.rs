//! Root solving: bracket check, strategy dispatch and the execution guard.
//!
//! [`find_rate`] is the single entry point used by bond yield and XIRR:
//!
//! 1. evaluate the residual at both bracket ends ([`check_bracket`]);
//! 2. return an endpoint directly if it is already a root;
//! 3. otherwise hand the bracket to the process-wide [`RootStrategy`].
//!
//! Callers wrap the whole call in an [`ExecutionGuard`] to bound its runtime
//! and pass its [`CancelFlag`] through, so an abandoned solve stops early.

mod bracket;
mod guard;
mod outcome;
mod scan;
mod strategy;

pub use bracket::{check_bracket, Bracket, BracketCheck, BOUNDARY_EPSILON};
pub use guard::{CancelFlag, ExecutionGuard, DEFAULT_SOLVER_TIMEOUT};
pub use outcome::{SolverMethod, SolverOutcome};
pub use scan::{count_sign_changes, multiple_root_warnings, MULTIPLE_ROOTS_WARNING, SAMPLE_RATES};
#[cfg(feature = "fast-solver")]
pub use strategy::BrentStrategy;
pub use strategy::{
    strategy_for, BisectionStrategy, Exhaustion, RootStrategy, SolverPreference,
    BISECTION_MAX_ITERATIONS, BISECTION_TOLERANCE,
};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::valuation::Valuation;

/// Reported by a solve that stopped because its flag was set.
pub const CANCELLED_MESSAGE: &str = "calculation cancelled";

/// Finds the rate zeroing `valuation` inside `bracket`.
///
/// `seed` starts unbracketed fallbacks; `exhaustion` decides what an
/// out-of-budget bisection returns. Once `cancel` is set no further residual
/// is evaluated.
///
/// # Errors
///
/// `NoSolution` from the bracket check or an exhausted bisection,
/// `SolverError` for non-finite residuals, a failed fallback or cancellation.
pub fn find_rate(
    strategy: &dyn RootStrategy,
    valuation: &dyn Valuation,
    bracket: Bracket,
    seed: f64,
    exhaustion: Exhaustion,
    cancel: &CancelFlag,
) -> AnalyticsResult<SolverOutcome> {
    if cancel.is_cancelled() {
        return Err(AnalyticsError::solver_error(CANCELLED_MESSAGE));
    }

    match check_bracket(valuation, bracket)? {
        BracketCheck::RootAtBoundary(rate) => {
            log::debug!("{} root at bracket boundary {rate}", valuation.label());
            Ok(SolverOutcome::new(rate, 0, SolverMethod::Boundary))
        }
        BracketCheck::SignChange { f_low, f_high } => {
            log::debug!(
                "{} bracket [{}, {}] residuals ({f_low:.6e}, {f_high:.6e}), solving with {}",
                valuation.label(),
                bracket.low(),
                bracket.high(),
                strategy.name()
            );
            // NaN makes every solver bail out at its next finiteness check.
            let f = |rate: f64| {
                if cancel.is_cancelled() {
                    f64::NAN
                } else {
                    valuation.residual(rate)
                }
            };
            let result = strategy.solve(&f, bracket, seed, exhaustion);
            if cancel.is_cancelled() {
                log::debug!("{} solve cancelled", valuation.label());
                return Err(AnalyticsError::solver_error(CANCELLED_MESSAGE));
            }
            let outcome = result?;
            log::debug!(
                "{} solved: rate={} iterations={} method={}",
                valuation.label(),
                outcome.rate,
                outcome.iterations,
                outcome.method
            );
            Ok(outcome)
        }
    }
}
