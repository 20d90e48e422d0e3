//! The result of one successful solve.

use std::fmt;

/// Which algorithm produced a rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverMethod {
    /// Brent's method over the validated bracket.
    Brent,
    /// Newton-Raphson after Brent failed.
    NewtonFallback,
    /// Dependency-free bisection.
    Bisection,
    /// A bracket endpoint was already a root; no solver ran.
    Boundary,
}

impl SolverMethod {
    /// Stable label reported to clients.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brent => "fast",
            Self::NewtonFallback => "fallback-fsolve",
            Self::Bisection => "bisection",
            Self::Boundary => "boundary",
        }
    }
}

impl fmt::Display for SolverMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rate found by a solver, with how it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutcome {
    /// The rate zeroing the residual.
    pub rate: f64,
    /// Iterations reported by the solver (0 for boundary roots).
    pub iterations: u32,
    /// Algorithm that produced `rate`.
    pub method: SolverMethod,
    /// Advisory caveats; never affect `rate`.
    pub warnings: Vec<String>,
}

impl SolverOutcome {
    /// Creates an outcome without warnings.
    #[must_use]
    pub fn new(rate: f64, iterations: u32, method: SolverMethod) -> Self {
        Self {
            rate,
            iterations,
            method,
            warnings: Vec::new(),
        }
    }

    /// Prepends `warnings` ahead of any the solver attached.
    #[must_use]
    pub fn with_warnings(mut self, mut warnings: Vec<String>) -> Self {
        warnings.append(&mut self.warnings);
        self.warnings = warnings;
        self
    }
}
