//! Root-finding algorithms.
//!
//! This module provides numerical solvers for scalar equations `f(x) = 0`:
//!
//! - [`bisection`]: Simple and reliable bracketing method, always available
//! - [`brent`]: Bisection, secant and inverse quadratic interpolation combined
//! - [`newton_raphson`]: Quadratic convergence from a single starting point
//!
//! `brent` and the Newton family are compiled with the `fast-solver` feature.
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Brent | Fast (superlinear) | Guaranteed | Bracket |
//! | Newton-Raphson | Fastest (quadratic) | May diverge | Starting point |
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//!
//! # Example
//!
//! ```rust
//! use fincalc_math::solvers::{bisection, SolverConfig};
//!
//! // Two-year zero coupon bond priced at 90 per 100 face
//! let f = |y: f64| 100.0 / (1.0 + y).powi(2) - 90.0;
//!
//! let config = SolverConfig::new(1e-6, 100);
//! let result = bisection(f, 0.0, 1.0, &config).unwrap();
//! assert!((result.root - 0.054_092).abs() < 1e-5);
//! ```

mod bisection;
#[cfg(feature = "fast-solver")]
mod brent;
#[cfg(feature = "fast-solver")]
mod newton;

pub use bisection::bisection;
#[cfg(feature = "fast-solver")]
pub use brent::brent;
#[cfg(feature = "fast-solver")]
pub use newton::{newton_raphson, newton_raphson_numerical};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Absolute residual below which a point is accepted as a root.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a converged root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
