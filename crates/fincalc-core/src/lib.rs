//! # FinCalc Core
//!
//! Core types for the FinCalc financial calculation service.
//!
//! This crate provides the domain values that every request is turned into
//! before any formula or solver touches it:
//!
//! - **Types**: `Date`, `CashFlow`, `CashFlowSeries`, `BondTerms`
//! - **Day Count Conventions**: ACT/365 Fixed, used to annualise cash flow dates
//! - **Rounding**: round-half-even on the exact binary value of an `f64`
//!
//! ## Design Philosophy
//!
//! - **Validated Construction**: a `CashFlowSeries` or `BondTerms` that exists is usable
//! - **Immutable Inputs**: values are built once per request and only read afterwards
//! - **Explicit Over Implicit**: failures carry the offending value in the message
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::prelude::*;
//!
//! let series = CashFlowSeries::new(vec![
//!     CashFlow::new(-10_000.0, Date::parse("2024-01-01").unwrap()),
//!     CashFlow::new(11_000.0, Date::parse("2025-01-01").unwrap()),
//! ])
//! .unwrap();
//! assert_eq!(series.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod daycounts;
pub mod error;
pub mod rounding;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act365Fixed, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::rounding::round_half_even;
    pub use crate::types::{BondTerms, CashFlow, CashFlowSeries, Date};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{BondTerms, CashFlow, CashFlowSeries, Date};
