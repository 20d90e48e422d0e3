//! Time value of money DTOs.

use serde::{Deserialize, Serialize};

use super::common::{Limits, Violations};
use crate::error::ApiResult;

/// Request to compound a principal forward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FutureValueRequest {
    /// Initial principal.
    pub principal: f64,

    /// Annual rate as a decimal (0.07 for 7%).
    pub annual_rate: f64,

    /// Term in years.
    pub years: f64,

    /// Compounding periods per year.
    pub compounds_per_year: u32,
}

impl FutureValueRequest {
    pub fn validate(&self, limits: &Limits) -> ApiResult<()> {
        let mut v = Violations::default();
        v.non_negative_amount("principal", self.principal, limits.max_amount);
        v.rate("annual_rate", self.annual_rate);
        v.term("years", self.years, limits.max_years);
        v.at_least("compounds_per_year", self.compounds_per_year, 1);
        v.finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FutureValueResponse {
    pub future_value: f64,
}

/// Request to discount a future amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentValueRequest {
    /// Amount received at the end of the term.
    pub future_value: f64,

    /// Annual discount rate as a decimal.
    pub annual_rate: f64,

    /// Term in years.
    pub years: f64,

    /// Compounding periods per year.
    pub compounds_per_year: u32,
}

impl PresentValueRequest {
    pub fn validate(&self, limits: &Limits) -> ApiResult<()> {
        let mut v = Violations::default();
        v.non_negative_amount("future_value", self.future_value, limits.max_amount);
        v.rate("annual_rate", self.annual_rate);
        v.term("years", self.years, limits.max_years);
        v.at_least("compounds_per_year", self.compounds_per_year, 1);
        v.finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PresentValueResponse {
    pub present_value: f64,
}

/// Request for the level payment of a fixed-term annuity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnuityPaymentRequest {
    /// Present value of the annuity.
    pub present_value: f64,

    /// Annual rate as a decimal.
    pub annual_rate: f64,

    /// Term in years.
    pub years: f64,

    /// Payments per year.
    pub payments_per_year: u32,
}

impl AnnuityPaymentRequest {
    pub fn validate(&self, limits: &Limits) -> ApiResult<()> {
        let mut v = Violations::default();
        v.non_negative_amount("present_value", self.present_value, limits.max_amount);
        v.rate("annual_rate", self.annual_rate);
        v.term("years", self.years, limits.max_years);
        v.at_least("payments_per_year", self.payments_per_year, 1);
        v.finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnuityPaymentResponse {
    pub payment: f64,
}
