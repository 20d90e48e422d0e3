//! Domain value types.
//!
//! Every type here is validated at construction and immutable afterwards.

mod bond_terms;
mod cashflow;
mod date;

pub use bond_terms::BondTerms;
pub use cashflow::{CashFlow, CashFlowSeries, MIN_CASH_FLOWS};
pub use date::Date;
