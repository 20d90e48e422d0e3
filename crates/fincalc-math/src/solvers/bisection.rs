//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// Repeatedly halves `[a, b]` and keeps the half whose endpoints still
/// straddle zero. Converges when `|f(mid)| < config.tolerance`; interval
/// width is never used as a stopping rule, so a run either hits the residual
/// tolerance or consumes every iteration.
///
/// The kept half is chosen by comparing the sign of `f(mid)` with the sign at
/// the current lower endpoint, which works whether `f` rises or falls.
///
/// Requires: `f(a) * f(b) <= 0` and both values finite.
///
/// # Returns
///
/// The midpoint that met the tolerance and the number of midpoints evaluated.
///
/// # Errors
///
/// - `InvalidBracket` if the endpoints share a sign.
/// - `NonFiniteValue` if any evaluation is NaN or infinite.
/// - `ConvergenceFailed` once `max_iterations` midpoints were tried; its
///   `best_estimate` is the midpoint of the final bracket.
///
/// # Example
///
/// ```rust
/// use fincalc_math::solvers::{bisection, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::new(1e-9, 100)).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut lo = a.min(b);
    let mut hi = a.max(b);

    let mut f_lo = f(lo);
    let f_hi = f(hi);

    if !f_lo.is_finite() {
        return Err(MathError::non_finite(lo, f_lo));
    }
    if !f_hi.is_finite() {
        return Err(MathError::non_finite(hi, f_hi));
    }

    if f_lo * f_hi > 0.0 {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    // Exact zeros carry no sign to compare against.
    if f_lo == 0.0 {
        return Ok(SolverResult {
            root: lo,
            iterations: 0,
            residual: f_lo,
        });
    }
    if f_hi == 0.0 {
        return Ok(SolverResult {
            root: hi,
            iterations: 0,
            residual: f_hi,
        });
    }

    for iteration in 0..config.max_iterations {
        let mid = (lo + hi) / 2.0;
        let f_mid = f(mid);

        if !f_mid.is_finite() {
            return Err(MathError::non_finite(mid, f_mid));
        }

        if f_mid.abs() < config.tolerance {
            return Ok(SolverResult {
                root: mid,
                iterations: iteration + 1,
                residual: f_mid,
            });
        }

        if f_mid.is_sign_positive() == f_lo.is_sign_positive() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    let mid = (lo + hi) / 2.0;
    let residual = f(mid).abs();
    log::trace!(
        "bisection exhausted {} iterations on [{lo}, {hi}], residual {residual:.3e}",
        config.max_iterations
    );
    Err(MathError::convergence_failed(
        config.max_iterations,
        residual,
        mid,
    ))
}
