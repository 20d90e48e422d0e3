//! Fixed-coupon bond terms.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// Contractual terms of a plain fixed-coupon bond.
///
/// Coupons are level and paid `payments_per_year` times a year; the face
/// value is repaid with the final coupon. A term shorter than one coupon
/// period has zero payments and prices at face value. The payment count is
/// capped at [`BondTerms::MAX_TOTAL_PAYMENTS`], which bounds the cost of
/// every valuation.
///
/// # Example
///
/// ```rust
/// use fincalc_core::types::BondTerms;
///
/// let terms = BondTerms::new(1000.0, 0.05, 10.0, 2).unwrap();
/// assert_eq!(terms.coupon_payment(), 25.0);
/// assert_eq!(terms.total_payments(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BondTerms {
    face_value: f64,
    coupon_rate: f64,
    years_to_maturity: f64,
    payments_per_year: u32,
}

impl BondTerms {
    /// Highest supported coupon frequency (monthly).
    pub const MAX_PAYMENTS_PER_YEAR: u32 = 12;

    /// Most coupon payments a bond may have (100 years of monthly coupons).
    pub const MAX_TOTAL_PAYMENTS: u32 = 1200;

    /// Creates validated bond terms.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidBondSpec` if any field is out of range.
    pub fn new(
        face_value: f64,
        coupon_rate: f64,
        years_to_maturity: f64,
        payments_per_year: u32,
    ) -> CoreResult<Self> {
        if !(face_value.is_finite() && face_value > 0.0) {
            return Err(CoreError::invalid_bond_spec(format!(
                "face value must be positive, got {face_value}"
            )));
        }
        if !(0.0..=1.0).contains(&coupon_rate) {
            return Err(CoreError::invalid_bond_spec(format!(
                "coupon rate must be in [0, 1], got {coupon_rate}"
            )));
        }
        if !(years_to_maturity.is_finite() && years_to_maturity > 0.0) {
            return Err(CoreError::invalid_bond_spec(format!(
                "years to maturity must be positive, got {years_to_maturity}"
            )));
        }
        if !(1..=Self::MAX_PAYMENTS_PER_YEAR).contains(&payments_per_year) {
            return Err(CoreError::invalid_bond_spec(format!(
                "payments per year must be in [1, {}], got {payments_per_year}",
                Self::MAX_PAYMENTS_PER_YEAR
            )));
        }
        let payments = payment_count(years_to_maturity, payments_per_year);
        if payments > f64::from(Self::MAX_TOTAL_PAYMENTS) {
            return Err(CoreError::invalid_bond_spec(format!(
                "{years_to_maturity} years at {payments_per_year} payments per year exceeds {} payments",
                Self::MAX_TOTAL_PAYMENTS
            )));
        }

        Ok(Self {
            face_value,
            coupon_rate,
            years_to_maturity,
            payments_per_year,
        })
    }

    /// Returns the face (redemption) value.
    #[must_use]
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Returns the annual coupon rate as a decimal.
    #[must_use]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Returns the remaining term in years.
    #[must_use]
    pub fn years_to_maturity(&self) -> f64 {
        self.years_to_maturity
    }

    /// Returns the coupon frequency.
    #[must_use]
    pub fn payments_per_year(&self) -> u32 {
        self.payments_per_year
    }

    /// Returns the level coupon paid each period: `face * coupon_rate / m`.
    #[must_use]
    pub fn coupon_payment(&self) -> f64 {
        self.face_value * self.coupon_rate / f64::from(self.payments_per_year)
    }

    /// Returns the number of remaining coupon payments, `floor(years * m)`.
    #[must_use]
    pub fn total_payments(&self) -> u32 {
        // In [0, MAX_TOTAL_PAYMENTS] by construction.
        payment_count(self.years_to_maturity, self.payments_per_year) as u32
    }
}

fn payment_count(years_to_maturity: f64, payments_per_year: u32) -> f64 {
    (years_to_maturity * f64::from(payments_per_year)).floor()
}
