//! Valuation functions: candidate rate in, signed residual out.
//!
//! A residual is zero at the answer. Both implementations precompute
//! everything that does not depend on the rate, so one evaluation is a
//! single O(N) pass with no allocation.

use fincalc_core::daycounts::Act365Fixed;
use fincalc_core::{BondTerms, CashFlowSeries};

/// A pure function of rate whose root is the quantity being solved for.
pub trait Valuation: Send + Sync {
    /// Evaluates the residual at `rate`.
    ///
    /// Finite for any finite `rate > -1`; may be NaN or infinite outside that.
    fn residual(&self, rate: f64) -> f64;

    /// Short name used in diagnostics, e.g. `npv(low=-0.5)=...`.
    fn label(&self) -> &'static str;

    /// Message reported when the bracket shows no sign change.
    fn no_root_message(&self) -> &'static str;
}

/// Present value of a fixed-coupon bond minus its market price.
///
/// `f(y) = Σ_{i=1..N} c / (1 + y/m)^i + F / (1 + y/m)^N − P`
#[derive(Debug, Clone, Copy)]
pub struct BondValuation {
    coupon: f64,
    face_value: f64,
    periods: u32,
    frequency: f64,
    target_price: f64,
}

impl BondValuation {
    /// Creates a bond valuation against `target_price`.
    #[must_use]
    pub fn new(terms: &BondTerms, target_price: f64) -> Self {
        Self {
            coupon: terms.coupon_payment(),
            face_value: terms.face_value(),
            periods: terms.total_payments(),
            frequency: f64::from(terms.payments_per_year()),
            target_price,
        }
    }

    /// Discounted value of all remaining coupons and the redemption at `yield_rate`.
    #[must_use]
    pub fn price_at(&self, yield_rate: f64) -> f64 {
        let factor = 1.0 / (1.0 + yield_rate / self.frequency);
        let mut discount = 1.0;
        let mut pv_coupons = 0.0;
        for _ in 0..self.periods {
            discount *= factor;
            pv_coupons += self.coupon * discount;
        }
        pv_coupons + self.face_value * discount
    }
}

impl Valuation for BondValuation {
    fn residual(&self, rate: f64) -> f64 {
        self.price_at(rate) - self.target_price
    }

    fn label(&self) -> &'static str {
        "pv"
    }

    fn no_root_message(&self) -> &'static str {
        "No bond yield solution in [0, 1] for the given inputs."
    }
}

/// Net present value of dated cash flows.
///
/// `f(r) = Σ a_i / (1 + r)^(d_i / 365)` with `d_i` counted from the earliest date.
#[derive(Debug, Clone)]
pub struct XirrValuation {
    timeline: Vec<(f64, f64)>,
}

impl XirrValuation {
    /// Creates an NPV valuation over the series.
    #[must_use]
    pub fn new(series: &CashFlowSeries) -> Self {
        Self {
            timeline: series.timeline(&Act365Fixed),
        }
    }

    /// Number of cash flows discounted per evaluation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    /// Returns true if there is nothing to discount.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }
}

impl Valuation for XirrValuation {
    fn residual(&self, rate: f64) -> f64 {
        let base = 1.0 + rate;
        self.timeline
            .iter()
            .map(|&(years, amount)| amount / base.powf(years))
            .sum()
    }

    fn label(&self) -> &'static str {
        "npv"
    }

    fn no_root_message(&self) -> &'static str {
        "No XIRR solution in the searched range for the given cashflows."
    }
}
