//! Mortgage DTOs.

use fincalc_analytics::mortgage::{
    AmortizationRow, AmortizationSchedule, ExtraPaymentPlan, MortgageSummary,
};
use serde::{Deserialize, Serialize};

use super::common::{money, Limits, Violations};
use crate::config::MAX_AMORTIZATION_MONTHS;
use crate::error::ApiResult;

/// Loan terms shared by every mortgage endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageRequest {
    /// Loan principal.
    pub principal: f64,

    /// Annual rate as a decimal.
    pub annual_rate: f64,

    /// Loan term in years.
    pub years: f64,
}

impl MortgageRequest {
    pub fn validate(&self, limits: &Limits) -> ApiResult<()> {
        let mut v = Violations::default();
        self.collect(&mut v, limits);
        v.finish()
    }

    fn collect(&self, v: &mut Violations, limits: &Limits) {
        v.non_negative_amount("principal", self.principal, limits.max_amount);
        v.rate("annual_rate", self.annual_rate);
        v.term("years", self.years, limits.max_years);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MortgagePaymentResponse {
    pub monthly_payment: f64,
}

fn default_max_months() -> u32 {
    MAX_AMORTIZATION_MONTHS
}

/// Loan terms plus a cap on returned rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationScheduleRequest {
    #[serde(flatten)]
    pub loan: MortgageRequest,

    /// Maximum rows to return (default 600).
    #[serde(default = "default_max_months")]
    pub max_months: u32,
}

impl AmortizationScheduleRequest {
    /// The configured ceiling is a separate guard, checked by the handler.
    pub fn validate(&self, limits: &Limits) -> ApiResult<()> {
        let mut v = Violations::default();
        self.loan.collect(&mut v, limits);
        v.at_least("max_months", self.max_months, 1);
        v.finish()
    }
}

/// One amortization row, rounded.
#[derive(Debug, Clone, Serialize)]
pub struct AmortizationPayment {
    pub month: u32,
    pub payment: f64,
    pub principal_payment: f64,
    pub interest_payment: f64,
    pub remaining_balance: f64,
}

impl From<&AmortizationRow> for AmortizationPayment {
    fn from(row: &AmortizationRow) -> Self {
        Self {
            month: row.month,
            payment: money(row.payment),
            principal_payment: money(row.principal_payment),
            interest_payment: money(row.interest_payment),
            remaining_balance: money(row.remaining_balance),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AmortizationScheduleResponse {
    pub monthly_payment: f64,
    pub total_payments: u32,
    pub schedule: Vec<AmortizationPayment>,
}

impl From<AmortizationSchedule> for AmortizationScheduleResponse {
    fn from(schedule: AmortizationSchedule) -> Self {
        Self {
            monthly_payment: money(schedule.monthly_payment),
            total_payments: schedule.total_payments,
            schedule: schedule.rows.iter().map(AmortizationPayment::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MortgageSummaryResponse {
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    pub payoff_months: u32,
    pub payoff_date: String,
}

impl From<MortgageSummary> for MortgageSummaryResponse {
    fn from(summary: MortgageSummary) -> Self {
        Self {
            monthly_payment: money(summary.monthly_payment),
            total_paid: money(summary.total_paid),
            total_interest: money(summary.total_interest),
            payoff_months: summary.payoff_months,
            payoff_date: summary.payoff_date,
        }
    }
}

/// Loan terms plus a constant extra monthly principal payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraPaymentsRequest {
    #[serde(flatten)]
    pub loan: MortgageRequest,

    /// Extra payment applied to principal each month.
    pub extra_monthly_payment: f64,
}

impl ExtraPaymentsRequest {
    pub fn validate(&self, limits: &Limits) -> ApiResult<()> {
        let mut v = Violations::default();
        self.loan.collect(&mut v, limits);
        v.non_negative_amount(
            "extra_monthly_payment",
            self.extra_monthly_payment,
            limits.max_amount,
        );
        v.finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtraPaymentsResponse {
    pub regular_monthly_payment: f64,
    pub total_monthly_payment: f64,
    pub original_payoff_months: u32,
    pub new_payoff_months: u32,
    pub months_saved: i64,
    pub original_total_interest: f64,
    pub new_total_interest: f64,
    pub interest_saved: f64,
    pub new_payoff_date: String,
}

impl From<ExtraPaymentPlan> for ExtraPaymentsResponse {
    fn from(plan: ExtraPaymentPlan) -> Self {
        Self {
            regular_monthly_payment: money(plan.regular_monthly_payment),
            total_monthly_payment: money(plan.total_monthly_payment),
            original_payoff_months: plan.original_payoff_months,
            new_payoff_months: plan.new_payoff_months,
            months_saved: plan.months_saved,
            original_total_interest: money(plan.original_total_interest),
            new_total_interest: money(plan.new_total_interest),
            interest_saved: money(plan.interest_saved),
            new_payoff_date: plan.new_payoff_date,
        }
    }
}
