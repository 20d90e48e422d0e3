//! # FinCalc Math
//!
//! Scalar root-finding for the FinCalc financial calculation service.
//!
//! This crate provides:
//!
//! - **Bisection**: always compiled, no assumptions beyond a sign change
//! - **Brent**: bracketed superlinear method (`fast-solver` feature)
//! - **Newton-Raphson**: derivative or finite-difference iteration (`fast-solver` feature)
//! - **Capability detection**: which of the above this build carries
//!
//! ## Design Philosophy
//!
//! - **Explicit Failure**: every non-converged run is an error carrying the last residual
//! - **Pure Functions**: solvers only call the closure they are given
//! - **Optional Speed**: the fast path is a cargo feature, never a runtime check

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod capability;
pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::capability::SolverCapability;
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{bisection, SolverConfig, SolverResult};

    #[cfg(feature = "fast-solver")]
    pub use crate::solvers::{brent, newton_raphson, newton_raphson_numerical};
}

pub use capability::SolverCapability;
pub use error::{MathError, MathResult};
