//! Common DTO types.

use fincalc_core::rounding::round_half_even;
use serde::Serialize;

use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};

/// Successful response: `{ "ok": true, ...fields }`.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub ok: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Envelope<T> {
    /// Wraps `body` as a success.
    pub fn ok(body: T) -> axum::Json<Self> {
        axum::Json(Self { ok: true, body })
    }
}

/// Request limits taken from configuration.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// Largest absolute monetary amount.
    pub max_amount: f64,
    /// Configured cash flow ceiling.
    pub max_cashflows: usize,
    /// Configured amortization ceiling.
    pub max_months: u32,
    /// Longest accepted term in years.
    pub max_years: f64,
}

impl From<&ServerConfig> for Limits {
    fn from(config: &ServerConfig) -> Self {
        Self {
            max_amount: config.max_amount,
            max_cashflows: config.max_xirr_cashflows,
            max_months: config.max_amortization_months,
            max_years: config.max_term_years,
        }
    }
}

/// Collects field violations as `"field: reason"` lines.
#[derive(Debug, Default)]
pub struct Violations(Vec<String>);

impl Violations {
    /// Records `reason` for `field` unless `ok`.
    pub fn check(&mut self, ok: bool, field: &str, reason: impl FnOnce() -> String) {
        if !ok {
            self.0.push(format!("{field}: {}", reason()));
        }
    }

    /// `|value| <= max`.
    pub fn amount(&mut self, field: &str, value: f64, max: f64) {
        self.check(value.is_finite() && value.abs() <= max, field, || {
            format!("absolute value must be <= {max:e}")
        });
    }

    /// `0 <= value <= max`.
    pub fn non_negative_amount(&mut self, field: &str, value: f64, max: f64) {
        self.check(value.is_finite() && (0.0..=max).contains(&value), field, || {
            format!("must be >= 0 and <= {max:e}")
        });
    }

    /// `0 < value <= max`.
    pub fn positive_amount(&mut self, field: &str, value: f64, max: f64) {
        self.check(value.is_finite() && value > 0.0 && value <= max, field, || {
            format!("must be > 0 and <= {max:e}")
        });
    }

    /// Rate as a decimal in `[0, 1]`.
    pub fn rate(&mut self, field: &str, value: f64) {
        self.check((0.0..=1.0).contains(&value), field, || {
            format!(
                "must be between 0 and 1 (100%); convert percentages to decimals (7% = 0.07), got {value}"
            )
        });
    }

    /// Term in years, `0 < value <= max`.
    pub fn term(&mut self, field: &str, value: f64, max: f64) {
        self.check(value.is_finite() && value > 0.0 && value <= max, field, || {
            format!("must be > 0 and <= {max} years")
        });
    }

    /// Integer count at least `min`.
    pub fn at_least(&mut self, field: &str, value: u32, min: u32) {
        self.check(value >= min, field, || format!("must be >= {min}"));
    }

    /// Returns the collected violations as a validation error, if any.
    pub fn finish(self) -> ApiResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.0))
        }
    }
}

/// Rounds a monetary amount for transmission.
pub fn money(value: f64) -> f64 {
    round_half_even(value, 2)
}

/// Rounds a rate for transmission.
pub fn rate(value: f64) -> f64 {
    round_half_even(value, 6)
}

/// Rounds a bond price for transmission.
pub fn price(value: f64) -> f64 {
    round_half_even(value, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violations_collect_in_order() {
        let mut v = Violations::default();
        v.rate("annual_rate", 7.0);
        v.term("years", 0.0, 100.0);
        v.amount("amount", -5.0, 1e12);

        let err = v.finish().unwrap_err();
        match err {
            ApiError::Validation(details) => {
                assert_eq!(details.len(), 2);
                assert!(details[0].starts_with("annual_rate: "));
                assert_eq!(details[1], "years: must be > 0 and <= 100 years");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut v = Violations::default();
        v.rate("annual_rate", f64::NAN);
        v.positive_amount("face_value", f64::INFINITY, 1e12);
        assert!(v.finish().is_err());
    }

    #[test]
    fn test_term_ceiling() {
        let mut v = Violations::default();
        v.term("years", 100.0, 100.0);
        assert!(v.finish().is_ok());

        let mut v = Violations::default();
        v.term("years_to_maturity", 1e12, 100.0);
        v.term("years", f64::INFINITY, 100.0);
        match v.finish().unwrap_err() {
            ApiError::Validation(details) => assert_eq!(
                details,
                vec![
                    "years_to_maturity: must be > 0 and <= 100 years",
                    "years: must be > 0 and <= 100 years",
                ]
            ),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_envelope_flattens() {
        #[derive(Serialize)]
        struct Body {
            price: f64,
        }

        let json = serde_json::to_value(Envelope::ok(Body { price: 1.5 }).0).unwrap();
        assert_eq!(json, serde_json::json!({"ok": true, "price": 1.5}));
    }

    #[test]
    fn test_rounding() {
        assert_eq!(money(1432.2458863963616), 1432.25);
        assert_eq!(rate(0.09971358593414137), 0.099714);
        assert_eq!(price(925.6126256977221), 925.6126);
    }
}
