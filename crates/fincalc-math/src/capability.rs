//! Compile-time solver capability.

use std::fmt;

/// Which root-finding algorithms this build carries.
///
/// Resolved from cargo features, so [`SolverCapability::detect`] returns the
/// same answer for the life of the process. Callers resolve it once at
/// startup and pass it on explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverCapability {
    /// Brent with a Newton-Raphson fallback is available.
    Fast,
    /// Only bisection is available.
    BisectionOnly,
}

impl SolverCapability {
    /// Detects the capability compiled into this build.
    #[must_use]
    pub const fn detect() -> Self {
        if cfg!(feature = "fast-solver") {
            Self::Fast
        } else {
            Self::BisectionOnly
        }
    }

    /// Returns true if the fast path can be selected.
    #[must_use]
    pub const fn has_fast_path(self) -> bool {
        matches!(self, Self::Fast)
    }
}

impl fmt::Display for SolverCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fast => write!(f, "fast"),
            Self::BisectionOnly => write!(f, "bisection-only"),
        }
    }
}
