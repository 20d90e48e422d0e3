//! XIRR DTOs.

use fincalc_analytics::solve::SolverOutcome;
use fincalc_analytics::xirr::DEFAULT_INITIAL_GUESS;
use fincalc_core::{CashFlow, CashFlowSeries, Date};
use serde::{Deserialize, Serialize};

use super::common::{rate, Limits, Violations};
use crate::config::MAX_XIRR_CASHFLOWS;
use crate::error::{ApiError, ApiResult};

/// A dated cash flow as sent by clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowInput {
    /// Negative for outflows, positive for inflows.
    pub amount: f64,

    /// `YYYY-MM-DD`.
    pub date: String,
}

fn default_max_cashflows() -> usize {
    MAX_XIRR_CASHFLOWS
}

fn default_initial_guess() -> f64 {
    DEFAULT_INITIAL_GUESS
}

/// Request shared by `/v1/xirr` and `/v1/xirr/explain`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XirrRequest {
    pub cashflows: Vec<CashFlowInput>,

    /// Per-request cap, in `[2, 1000]`.
    #[serde(default = "default_max_cashflows")]
    pub max_cashflows: usize,

    /// Seeds the bracket choice and the fallback.
    #[serde(default = "default_initial_guess")]
    pub initial_guess: f64,
}

impl XirrRequest {
    /// Validates the request and builds the series.
    ///
    /// Request-level fields are checked first, then the count guard, then
    /// each entry, so an oversized request never has its entries parsed.
    pub fn to_series(&self, limits: &Limits) -> ApiResult<CashFlowSeries> {
        let mut v = Violations::default();
        v.check(
            (2..=MAX_XIRR_CASHFLOWS).contains(&self.max_cashflows),
            "max_cashflows",
            || format!("must be between 2 and {MAX_XIRR_CASHFLOWS}"),
        );
        v.check(self.cashflows.len() >= 2, "cashflows", || {
            "must have at least 2 entries".to_string()
        });
        v.check(self.initial_guess.is_finite(), "initial_guess", || {
            "must be a finite number".to_string()
        });
        v.finish()?;

        let limit = self.max_cashflows.min(limits.max_cashflows);
        if self.cashflows.len() > limit {
            return Err(ApiError::TooManyCashFlows {
                limit,
                received: self.cashflows.len(),
            });
        }

        let mut v = Violations::default();
        let mut flows = Vec::with_capacity(self.cashflows.len());
        for (i, input) in self.cashflows.iter().enumerate() {
            v.amount(&format!("cashflows[{i}].amount"), input.amount, limits.max_amount);
            match Date::parse(&input.date) {
                Ok(date) => flows.push(CashFlow::new(input.amount, date)),
                Err(_) => v.check(false, &format!("cashflows[{i}].date"), || {
                    "date must be in YYYY-MM-DD format".to_string()
                }),
            }
        }
        v.finish()?;

        CashFlowSeries::new(flows).map_err(|e| ApiError::Validation(vec![e.to_string()]))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct XirrResponse {
    pub xirr: f64,
}

/// Rate with solver diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct XirrExplainResponse {
    pub xirr: f64,
    pub iterations: u32,
    pub solver_type: &'static str,
    pub warnings: Vec<String>,
}

impl From<SolverOutcome> for XirrExplainResponse {
    fn from(outcome: SolverOutcome) -> Self {
        Self {
            xirr: rate(outcome.rate),
            iterations: outcome.iterations,
            solver_type: outcome.method.as_str(),
            warnings: outcome.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> Limits {
        Limits {
            max_amount: 1e12,
            max_cashflows: 1000,
            max_months: 600,
            max_years: 100.0,
        }
    }

    fn request(flows: &[(f64, &str)]) -> XirrRequest {
        XirrRequest {
            cashflows: flows
                .iter()
                .map(|&(amount, date)| CashFlowInput {
                    amount,
                    date: date.to_string(),
                })
                .collect(),
            max_cashflows: MAX_XIRR_CASHFLOWS,
            initial_guess: DEFAULT_INITIAL_GUESS,
        }
    }

    #[test]
    fn test_defaults() {
        let req: XirrRequest = serde_json::from_str(
            r#"{"cashflows":[{"amount":-100,"date":"2024-01-01"},{"amount":110,"date":"2025-01-01"}]}"#,
        )
        .unwrap();
        assert_eq!(req.max_cashflows, 1000);
        assert_eq!(req.initial_guess, 0.1);
        assert_eq!(req.to_series(&limits()).unwrap().len(), 2);
    }

    #[test]
    fn test_bad_date_names_entry() {
        let req = request(&[(-100.0, "2024-01-01"), (110.0, "2025/01/01")]);
        match req.to_series(&limits()).unwrap_err() {
            ApiError::Validation(details) => {
                assert_eq!(
                    details,
                    vec!["cashflows[1].date: date must be in YYYY-MM-DD format"]
                );
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_configured_limit_applies() {
        let req = request(&[
            (-100.0, "2024-01-01"),
            (50.0, "2024-06-01"),
            (60.0, "2025-01-01"),
        ]);
        let tight = Limits {
            max_cashflows: 2,
            ..limits()
        };
        assert!(matches!(
            req.to_series(&tight).unwrap_err(),
            ApiError::TooManyCashFlows {
                limit: 2,
                received: 3
            }
        ));
    }

    #[test]
    fn test_amount_ceiling() {
        let req = request(&[(-2e12, "2024-01-01"), (110.0, "2025-01-01")]);
        assert!(matches!(
            req.to_series(&limits()).unwrap_err(),
            ApiError::Validation(_)
        ));
    }
}
