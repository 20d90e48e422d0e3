//! Dated cash flows for irregular-schedule valuation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::daycounts::DayCount;
use crate::error::{CoreError, CoreResult};

/// Minimum number of cash flows in a valuation series.
pub const MIN_CASH_FLOWS: usize = 2;

/// A single dated cash flow.
///
/// Negative amounts are outflows (investments), positive amounts are inflows.
///
/// # Example
///
/// ```rust
/// use fincalc_core::types::{CashFlow, Date};
///
/// let cf = CashFlow::new(-10_000.0, Date::from_ymd(2024, 1, 1).unwrap());
/// assert!(cf.is_outflow());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Cash flow amount (negative = outflow)
    amount: f64,
    /// Payment date
    date: Date,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(amount: f64, date: Date) -> Self {
        Self { amount, date }
    }

    /// Returns the signed amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns true for money leaving the investor.
    #[must_use]
    pub fn is_outflow(&self) -> bool {
        self.amount < 0.0
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.date, self.amount)
    }
}

/// An immutable, temporally anchored series of cash flows.
///
/// Entries keep their input order; elapsed time is always measured from the
/// earliest date in the series, so an unsorted series values identically to
/// its sorted form.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowSeries {
    flows: Vec<CashFlow>,
    anchor: Date,
}

impl CashFlowSeries {
    /// Creates a series from at least two cash flows with finite amounts.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidCashFlow` for short series or non-finite amounts.
    pub fn new(flows: Vec<CashFlow>) -> CoreResult<Self> {
        if flows.len() < MIN_CASH_FLOWS {
            return Err(CoreError::invalid_cash_flow(format!(
                "series needs at least {MIN_CASH_FLOWS} cash flows, got {}",
                flows.len()
            )));
        }

        if let Some(bad) = flows.iter().find(|cf| !cf.amount.is_finite()) {
            return Err(CoreError::invalid_cash_flow(format!(
                "amount on {} is not finite",
                bad.date
            )));
        }

        let anchor = flows
            .iter()
            .map(CashFlow::date)
            .min()
            .ok_or_else(|| CoreError::invalid_cash_flow("empty series"))?;

        Ok(Self { flows, anchor })
    }

    /// Returns the number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Returns true if the series has no entries (never true once constructed).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Returns the earliest date in the series.
    #[must_use]
    pub fn anchor(&self) -> Date {
        self.anchor
    }

    /// Iterates over the cash flows in input order.
    pub fn iter(&self) -> impl Iterator<Item = &CashFlow> {
        self.flows.iter()
    }

    /// Returns `(year_fraction, amount)` pairs measured from the anchor date.
    ///
    /// Computed once per series so repeated residual evaluations stay O(N).
    #[must_use]
    pub fn timeline<D: DayCount>(&self, day_count: &D) -> Vec<(f64, f64)> {
        self.flows
            .iter()
            .map(|cf| (day_count.year_fraction_f64(self.anchor, cf.date), cf.amount))
            .collect()
    }

    /// Returns true if the series contains both an outflow and an inflow.
    #[must_use]
    pub fn has_mixed_signs(&self) -> bool {
        self.flows.iter().any(|cf| cf.amount < 0.0) && self.flows.iter().any(|cf| cf.amount > 0.0)
    }
}

impl<'a> IntoIterator for &'a CashFlowSeries {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.flows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daycounts::Act365Fixed;
    use approx::assert_relative_eq;

    fn date(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    #[test]
    fn test_series_requires_two_flows() {
        let single = vec![CashFlow::new(-100.0, date("2024-01-01"))];
        assert!(CashFlowSeries::new(single).is_err());
        assert!(CashFlowSeries::new(Vec::new()).is_err());
    }

    #[test]
    fn test_series_rejects_non_finite_amount() {
        let flows = vec![
            CashFlow::new(f64::NAN, date("2024-01-01")),
            CashFlow::new(100.0, date("2025-01-01")),
        ];
        assert!(CashFlowSeries::new(flows).is_err());
    }

    #[test]
    fn test_timeline_from_earliest_date() {
        let flows = vec![
            CashFlow::new(5_000.0, date("2025-01-01")),
            CashFlow::new(-10_000.0, date("2024-01-01")),
            CashFlow::new(6_000.0, date("2026-01-01")),
        ];
        let series = CashFlowSeries::new(flows).unwrap();
        assert_eq!(series.anchor(), date("2024-01-01"));

        let timeline = series.timeline(&Act365Fixed);
        assert_relative_eq!(timeline[0].0, 366.0 / 365.0);
        assert_relative_eq!(timeline[1].0, 0.0);
        assert_relative_eq!(timeline[2].0, 731.0 / 365.0);
        assert_relative_eq!(timeline[1].1, -10_000.0);
    }

    #[test]
    fn test_mixed_signs() {
        let flows = vec![
            CashFlow::new(1_000.0, date("2024-01-01")),
            CashFlow::new(2_000.0, date("2025-01-01")),
        ];
        let series = CashFlowSeries::new(flows).unwrap();
        assert!(!series.has_mixed_signs());
    }
}
