//! # FinCalc Analytics
//!
//! Calculation engine for the FinCalc financial calculation service.
//!
//! This crate provides:
//! - **Valuation**: bond present value and cash-flow NPV as functions of rate
//! - **Solving**: bracket check, Brent/bisection strategies, execution guard
//! - **Bonds**: price at yield, yield to maturity
//! - **XIRR**: rate of return for irregularly dated cash flows, with diagnostics
//! - **TVM**: future value, present value, annuity payment
//! - **Mortgage**: payment, amortization schedule, summary, extra payments
//!
//! ## Usage
//!
//! ```rust
//! use fincalc_analytics::prelude::*;
//! use fincalc_core::prelude::*;
//!
//! let strategy = strategy_for(SolverCapability::detect(), SolverPreference::Auto);
//! let series = CashFlowSeries::new(vec![
//!     CashFlow::new(-10_000.0, Date::parse("2024-01-01").unwrap()),
//!     CashFlow::new(11_000.0, Date::parse("2025-01-01").unwrap()),
//! ])
//! .unwrap();
//!
//! let outcome = xirr(strategy.as_ref(), &series, 0.1, &CancelFlag::new()).unwrap();
//! assert!((outcome.rate - 0.0997).abs() < 1e-3);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bonds;
pub mod error;
pub mod mortgage;
pub mod solve;
pub mod tvm;
pub mod valuation;
pub mod xirr;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bonds::{price_at_yield, yield_to_maturity};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::mortgage::{
        amortization_schedule, monthly_payment, summary, with_extra_payments, AmortizationRow,
        AmortizationSchedule, ExtraPaymentPlan, MortgageSummary,
    };
    pub use crate::solve::{
        check_bracket, find_rate, strategy_for, BisectionStrategy, Bracket, CancelFlag,
        ExecutionGuard, Exhaustion, RootStrategy, SolverMethod, SolverOutcome, SolverPreference,
    };
    pub use crate::tvm::{annuity_payment, future_value, present_value};
    pub use crate::valuation::{BondValuation, Valuation, XirrValuation};
    pub use crate::xirr::{explain_xirr, xirr};
    pub use fincalc_math::SolverCapability;
}
