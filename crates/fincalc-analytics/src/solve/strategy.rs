//! Interchangeable root-finding strategies.
//!
//! The bracket check and the valuation functions never see which strategy
//! runs. Selection happens once, from the compiled [`SolverCapability`] and
//! the configured [`SolverPreference`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use fincalc_math::solvers::{bisection, SolverConfig};
use fincalc_math::{MathError, SolverCapability};
use serde::{Deserialize, Serialize};

use super::bracket::Bracket;
use super::outcome::{SolverMethod, SolverOutcome};
use crate::error::{AnalyticsError, AnalyticsResult};

/// Residual tolerance of the bisection fallback.
pub const BISECTION_TOLERANCE: f64 = 1e-6;

/// Iteration budget of the bisection fallback.
pub const BISECTION_MAX_ITERATIONS: u32 = 100;

/// What bisection does when its iteration budget runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exhaustion {
    /// Return the midpoint of the final bracket.
    BestEstimate,
    /// Fail with `NoSolution` carrying this message.
    NoSolution(&'static str),
}

/// A root-finding algorithm over a validated bracket.
pub trait RootStrategy: Send + Sync + fmt::Debug {
    /// Finds `rate` with `f(rate) ≈ 0` inside `bracket`.
    ///
    /// `seed` is the starting point for methods that need one. The bracket
    /// must already have passed [`check_bracket`](super::check_bracket).
    fn solve(
        &self,
        f: &dyn Fn(f64) -> f64,
        bracket: Bracket,
        seed: f64,
        exhaustion: Exhaustion,
    ) -> AnalyticsResult<SolverOutcome>;

    /// Name for logs.
    fn name(&self) -> &'static str;
}

/// Plain bisection: tolerance `1e-6`, at most 100 iterations.
#[derive(Debug, Clone, Copy, Default)]
pub struct BisectionStrategy;

impl RootStrategy for BisectionStrategy {
    fn solve(
        &self,
        f: &dyn Fn(f64) -> f64,
        bracket: Bracket,
        _seed: f64,
        exhaustion: Exhaustion,
    ) -> AnalyticsResult<SolverOutcome> {
        let config = SolverConfig::new(BISECTION_TOLERANCE, BISECTION_MAX_ITERATIONS);

        match bisection(f, bracket.low(), bracket.high(), &config) {
            Ok(result) => Ok(SolverOutcome::new(
                result.root,
                result.iterations,
                SolverMethod::Bisection,
            )),
            Err(MathError::ConvergenceFailed {
                iterations,
                residual,
                best_estimate,
            }) => match exhaustion {
                Exhaustion::BestEstimate => {
                    log::debug!(
                        "bisection exhausted {iterations} iterations, returning best estimate {best_estimate} (residual {residual:.3e})"
                    );
                    let mut outcome =
                        SolverOutcome::new(best_estimate, iterations, SolverMethod::Bisection);
                    outcome.warnings.push(format!(
                        "Bisection did not converge within {iterations} iterations; returning best estimate."
                    ));
                    Ok(outcome)
                }
                Exhaustion::NoSolution(message) => {
                    Err(AnalyticsError::no_solution(message, Vec::new()))
                }
            },
            Err(err) => Err(err.into()),
        }
    }

    fn name(&self) -> &'static str {
        "bisection"
    }
}

/// Brent over the bracket, falling back to Newton-Raphson from the seed.
#[cfg(feature = "fast-solver")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrentStrategy;

#[cfg(feature = "fast-solver")]
impl RootStrategy for BrentStrategy {
    fn solve(
        &self,
        f: &dyn Fn(f64) -> f64,
        bracket: Bracket,
        seed: f64,
        _exhaustion: Exhaustion,
    ) -> AnalyticsResult<SolverOutcome> {
        use fincalc_math::solvers::{brent, newton_raphson_numerical};

        let config = SolverConfig::default();

        match brent(f, bracket.low(), bracket.high(), &config) {
            Ok(result) => Ok(SolverOutcome::new(
                result.root,
                result.iterations,
                SolverMethod::Brent,
            )),
            Err(brent_err) => {
                log::warn!("brent failed ({brent_err}), falling back to newton from {seed}");
                let result = newton_raphson_numerical(f, seed, &config)?;
                if !result.root.is_finite() {
                    return Err(AnalyticsError::solver_error(format!(
                        "newton fallback produced a non-finite root: {}",
                        result.root
                    )));
                }
                Ok(SolverOutcome::new(
                    result.root,
                    result.iterations,
                    SolverMethod::NewtonFallback,
                ))
            }
        }
    }

    fn name(&self) -> &'static str {
        "brent"
    }
}

/// Configured choice between the fast path and bisection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverPreference {
    /// Fast path when compiled in, bisection otherwise.
    #[default]
    Auto,
    /// Always bisection.
    Bisection,
}

impl FromStr for SolverPreference {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "bisection" => Ok(Self::Bisection),
            other => Err(AnalyticsError::invalid_input(format!(
                "unknown solver preference '{other}', expected 'auto' or 'bisection'"
            ))),
        }
    }
}

/// Selects the strategy for this process.
pub fn strategy_for(
    capability: SolverCapability,
    preference: SolverPreference,
) -> Arc<dyn RootStrategy> {
    match (capability, preference) {
        #[cfg(feature = "fast-solver")]
        (SolverCapability::Fast, SolverPreference::Auto) => Arc::new(BrentStrategy),
        (SolverCapability::Fast, SolverPreference::Bisection) => {
            log::warn!("fast solver available but bisection forced by configuration");
            Arc::new(BisectionStrategy)
        }
        _ => {
            if preference == SolverPreference::Auto {
                log::warn!("fast solver not compiled in, using bisection");
            }
            Arc::new(BisectionStrategy)
        }
    }
}
