//! Bond DTOs.

use fincalc_core::BondTerms;
use serde::{Deserialize, Serialize};

use super::common::{Limits, Violations};
use crate::error::{ApiError, ApiResult};

fn default_payments_per_year() -> u32 {
    2
}

fn check_terms(
    v: &mut Violations,
    limits: &Limits,
    face_value: f64,
    coupon_rate: f64,
    years_to_maturity: f64,
    payments_per_year: u32,
) {
    v.positive_amount("face_value", face_value, limits.max_amount);
    v.rate("coupon_rate", coupon_rate);
    v.term("years_to_maturity", years_to_maturity, limits.max_years);
    v.check((1..=12).contains(&payments_per_year), "payments_per_year", || {
        format!("must be between 1 and 12, got {payments_per_year}")
    });
}

fn build_terms(
    face_value: f64,
    coupon_rate: f64,
    years_to_maturity: f64,
    payments_per_year: u32,
) -> ApiResult<BondTerms> {
    BondTerms::new(face_value, coupon_rate, years_to_maturity, payments_per_year)
        .map_err(|e| ApiError::Validation(vec![e.to_string()]))
}

/// Request to solve for yield to maturity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BondYieldRequest {
    /// Face value repaid at maturity.
    pub face_value: f64,

    /// Annual coupon rate as a decimal.
    pub coupon_rate: f64,

    /// Years to maturity.
    pub years_to_maturity: f64,

    /// Market price.
    pub current_price: f64,

    /// Coupon payments per year (default 2).
    #[serde(default = "default_payments_per_year")]
    pub payments_per_year: u32,
}

impl BondYieldRequest {
    /// Validates every field and returns the bond terms.
    pub fn to_terms(&self, limits: &Limits) -> ApiResult<BondTerms> {
        let mut v = Violations::default();
        check_terms(
            &mut v,
            limits,
            self.face_value,
            self.coupon_rate,
            self.years_to_maturity,
            self.payments_per_year,
        );
        v.positive_amount("current_price", self.current_price, limits.max_amount);
        v.finish()?;

        build_terms(
            self.face_value,
            self.coupon_rate,
            self.years_to_maturity,
            self.payments_per_year,
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BondYieldResponse {
    pub yield_to_maturity: f64,
}

/// Request to price a bond at a yield.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BondPriceRequest {
    pub face_value: f64,
    pub coupon_rate: f64,
    pub years_to_maturity: f64,

    /// Yield to maturity as a decimal.
    pub yield_to_maturity: f64,

    #[serde(default = "default_payments_per_year")]
    pub payments_per_year: u32,
}

impl BondPriceRequest {
    /// Validates every field and returns the bond terms.
    pub fn to_terms(&self, limits: &Limits) -> ApiResult<BondTerms> {
        let mut v = Violations::default();
        check_terms(
            &mut v,
            limits,
            self.face_value,
            self.coupon_rate,
            self.years_to_maturity,
            self.payments_per_year,
        );
        v.rate("yield_to_maturity", self.yield_to_maturity);
        v.finish()?;

        build_terms(
            self.face_value,
            self.coupon_rate,
            self.years_to_maturity,
            self.payments_per_year,
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BondPriceResponse {
    pub price: f64,
}
