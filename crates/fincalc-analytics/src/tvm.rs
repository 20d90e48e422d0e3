//! Time value of money.
//!
//! Closed-form compound interest and level annuity formulas. Results are
//! unrounded; callers round for presentation.

use crate::error::{AnalyticsError, AnalyticsResult};

/// Calculate future value under periodic compounding.
///
/// ```text
/// FV = P * (1 + r/n)^(n*t)
/// ```
///
/// # Errors
///
/// Returns `InvalidInput` if `compounds_per_year` is zero.
pub fn future_value(
    principal: f64,
    annual_rate: f64,
    years: f64,
    compounds_per_year: u32,
) -> AnalyticsResult<f64> {
    if compounds_per_year == 0 {
        return Err(AnalyticsError::invalid_input(
            "compounds_per_year must be greater than 0",
        ));
    }
    let n = f64::from(compounds_per_year);
    Ok(principal * (1.0 + annual_rate / n).powf(n * years))
}

/// Calculate present value of a single future amount.
///
/// ```text
/// PV = FV / (1 + r/n)^(n*t)
/// ```
///
/// A zero rate or zero compounding frequency discounts nothing.
#[must_use]
pub fn present_value(future_value: f64, annual_rate: f64, years: f64, compounds_per_year: u32) -> f64 {
    if annual_rate == 0.0 || compounds_per_year == 0 {
        return future_value;
    }
    let n = f64::from(compounds_per_year);
    future_value / (1.0 + annual_rate / n).powf(n * years)
}

/// Calculate the level payment that amortizes `present_value`.
///
/// ```text
/// Pmt = PV * r(1+r)^N / ((1+r)^N - 1),  r = annual_rate / m,  N = floor(t * m)
/// ```
///
/// With a zero periodic rate the payment is `PV / N`.
///
/// # Errors
///
/// Returns `InvalidInput` if `payments_per_year` is zero or the term is
/// shorter than one payment period.
pub fn annuity_payment(
    present_value: f64,
    annual_rate: f64,
    years: f64,
    payments_per_year: u32,
) -> AnalyticsResult<f64> {
    if payments_per_year == 0 {
        return Err(AnalyticsError::invalid_input(
            "payments_per_year must be greater than 0",
        ));
    }
    let m = f64::from(payments_per_year);
    let total_payments = (years * m).floor();
    if total_payments < 1.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "term of {years} years is shorter than one payment period"
        )));
    }

    let periodic_rate = annual_rate / m;
    if periodic_rate == 0.0 {
        return Ok(present_value / total_payments);
    }
    let growth = (1.0 + periodic_rate).powf(total_payments);
    Ok(present_value * periodic_rate * growth / (growth - 1.0))
}
