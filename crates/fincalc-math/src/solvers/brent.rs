//! Brent's root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Brent's root-finding algorithm.
///
/// Combines the reliability of bisection with the speed of the secant method
/// and inverse quadratic interpolation. An interpolated step is accepted only
/// while it lands between the bracket midpoint and the best point and keeps
/// shrinking; otherwise the step is a plain bisection.
///
/// Requires: `f(a) * f(b) <= 0` (opposite signs at endpoints)
///
/// # Errors
///
/// - `InvalidBracket` if the endpoints share a sign.
/// - `NonFiniteValue` if an evaluation returns NaN or infinity.
/// - `ConvergenceFailed` after `max_iterations` steps.
///
/// # Example
///
/// ```rust
/// use fincalc_math::solvers::{brent, SolverConfig};
///
/// // Find root of x^3 - x - 2
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((f(result.root)).abs() < 1e-10);
/// ```
pub fn brent<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let eval = |x: f64| {
        let fx = f(x);
        if fx.is_finite() {
            Ok(fx)
        } else {
            Err(MathError::non_finite(x, fx))
        }
    };

    // `b` is the best estimate, `a` the contrapoint with the opposite sign.
    let mut a = a;
    let mut b = b;
    let mut fa = eval(a)?;
    let mut fb = eval(b)?;

    if fa * fb > 0.0 {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    if fa.abs() < fb.abs() {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut c = a;
    let mut fc = fa;
    let mut step = b - a;
    let mut prev_step = step;

    for iteration in 0..config.max_iterations {
        if fb.abs() < config.tolerance || (b - a).abs() < config.tolerance {
            return Ok(SolverResult {
                root: b,
                iterations: iteration,
                residual: fb,
            });
        }

        let m = (a + b) / 2.0;
        let candidate = if (fa - fc).abs() > 1e-15 && (fb - fc).abs() > 1e-15 {
            // Inverse quadratic interpolation
            let r = fb / fc;
            let p = fa / fc;
            let q = fa / fb;
            Some(
                b - (q * (q - r) * (b - a) + (1.0 - r) * (b - c) * p)
                    / ((q - 1.0) * (r - 1.0) * (p - 1.0)),
            )
        } else if (fb - fa).abs() > 1e-15 {
            // Secant
            Some(b - fb * (b - a) / (fb - fa))
        } else {
            None
        };

        let s = match candidate {
            Some(s)
                if s.is_finite()
                    && s > m.min(b)
                    && s < m.max(b)
                    && (s - b).abs() < prev_step.abs() / 2.0 =>
            {
                prev_step = step;
                step = s - b;
                s
            }
            _ => {
                step = b - a;
                prev_step = step;
                m
            }
        };

        c = b;
        fc = fb;

        let fs = eval(s)?;
        if fa * fs < 0.0 {
            b = s;
            fb = fs;
        } else {
            a = s;
            fa = fs;
        }

        if fa.abs() < fb.abs() {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        fb.abs(),
        b,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;

        let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_cubic() {
        // x^3 - x - 2 has a root near 1.52
        let f = |x: f64| x * x * x - x - 2.0;

        let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert!(f(result.root).abs() < 1e-10);
        assert_relative_eq!(result.root, 1.521_379_706_804_568, epsilon = 1e-10);
    }

    #[test]
    fn test_npv_wide_bracket() {
        // One-year investment returning 10%
        let f = |r: f64| -10_000.0 + 11_000.0 / (1.0 + r);

        let result = brent(f, -0.99, 10.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.1, epsilon = 1e-10);
    }

    #[test]
    fn test_invalid_bracket() {
        let f = |x: f64| x * x - 2.0;

        let result = brent(f, 2.0, 3.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_non_finite_endpoint() {
        let f = |x: f64| 1.0 / x;

        let result = brent(f, 0.0, 1.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::NonFiniteValue { .. })));
    }

    #[test]
    fn test_faster_than_bisection() {
        let f = |x: f64| x * x - 2.0;

        let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        // Bisection needs ~34 iterations for 1e-10 tolerance
        assert!(result.iterations < 20);
    }
}
