//! Fixed-rate mortgage calculations.
//!
//! Provides:
//! - Monthly payment
//! - Amortization schedule
//! - Lifetime summary with payoff month
//! - Payoff acceleration from a constant extra monthly payment
//!
//! Payoff dates count the current month as the month of the first payment,
//! so a 12-month loan started any day in June 2025 pays off in `2026-05`.

use fincalc_core::Date;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Balances below one cent are treated as paid off.
pub const PAID_OFF_THRESHOLD: f64 = 0.01;

/// One row of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationRow {
    /// Payment number, starting at 1.
    pub month: u32,
    /// Total payment.
    pub payment: f64,
    /// Portion reducing the balance.
    pub principal_payment: f64,
    /// Portion paying interest.
    pub interest_payment: f64,
    /// Balance after the payment.
    pub remaining_balance: f64,
}

/// Amortization schedule, possibly truncated.
#[derive(Debug, Clone, PartialEq)]
pub struct AmortizationSchedule {
    /// Level monthly payment.
    pub monthly_payment: f64,
    /// Number of payments over the full term.
    pub total_payments: u32,
    /// At most `max_months` rows.
    pub rows: Vec<AmortizationRow>,
}

/// Lifetime totals of a mortgage.
#[derive(Debug, Clone, PartialEq)]
pub struct MortgageSummary {
    /// Level monthly payment.
    pub monthly_payment: f64,
    /// Sum of all payments.
    pub total_paid: f64,
    /// Sum of all payments minus principal.
    pub total_interest: f64,
    /// Number of monthly payments.
    pub payoff_months: u32,
    /// Month of the final payment, `YYYY-MM`.
    pub payoff_date: String,
}

/// Effect of paying a constant extra amount every month.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraPaymentPlan {
    /// Payment without the extra amount.
    pub regular_monthly_payment: f64,
    /// Payment including the extra amount.
    pub total_monthly_payment: f64,
    /// Payments over the contractual term.
    pub original_payoff_months: u32,
    /// Payments until the balance is cleared.
    pub new_payoff_months: u32,
    /// `original_payoff_months - new_payoff_months`.
    pub months_saved: i64,
    /// Interest over the contractual term.
    pub original_total_interest: f64,
    /// Interest with extra payments.
    pub new_total_interest: f64,
    /// `original_total_interest - new_total_interest`.
    pub interest_saved: f64,
    /// Month of the final payment, `YYYY-MM`.
    pub new_payoff_date: String,
}

/// Calculate the level monthly payment.
///
/// ```text
/// M = P * r(1+r)^n / ((1+r)^n - 1),  r = annual_rate / 12,  n = 12 * years
/// ```
///
/// `n` keeps its fractional part here; a zero rate gives `P / n`.
///
/// # Errors
///
/// Returns `InvalidInput` if `years` is not positive.
pub fn monthly_payment(principal: f64, annual_rate: f64, years: f64) -> AnalyticsResult<f64> {
    if !(years.is_finite() && years > 0.0) {
        return Err(AnalyticsError::invalid_input(format!(
            "years must be greater than 0, got {years}"
        )));
    }
    Ok(level_payment(principal, annual_rate / 12.0, years * 12.0))
}

/// Generate an amortization schedule of at most `max_months` rows.
///
/// # Errors
///
/// Returns `InvalidInput` if the term is shorter than one month.
pub fn amortization_schedule(
    principal: f64,
    annual_rate: f64,
    years: f64,
    max_months: u32,
) -> AnalyticsResult<AmortizationSchedule> {
    let total_payments = whole_months(years)?;
    let monthly_rate = annual_rate / 12.0;
    let payment = level_payment(principal, monthly_rate, f64::from(total_payments));

    let mut balance = principal;
    let rows = (1..=total_payments.min(max_months))
        .map(|month| {
            let interest_payment = balance * monthly_rate;
            let principal_payment = payment - interest_payment;
            balance -= principal_payment;
            if balance < PAID_OFF_THRESHOLD {
                balance = 0.0;
            }
            AmortizationRow {
                month,
                payment,
                principal_payment,
                interest_payment,
                remaining_balance: balance,
            }
        })
        .collect();

    Ok(AmortizationSchedule {
        monthly_payment: payment,
        total_payments,
        rows,
    })
}

/// Calculate lifetime totals and the payoff month for a loan starting in `start`'s month.
///
/// # Errors
///
/// Returns `InvalidInput` if the term is shorter than one month.
pub fn summary(
    principal: f64,
    annual_rate: f64,
    years: f64,
    start: Date,
) -> AnalyticsResult<MortgageSummary> {
    let payoff_months = whole_months(years)?;
    let payment = level_payment(principal, annual_rate / 12.0, f64::from(payoff_months));
    let total_paid = payment * f64::from(payoff_months);

    Ok(MortgageSummary {
        monthly_payment: payment,
        total_paid,
        total_interest: total_paid - principal,
        payoff_months,
        payoff_date: payoff_month(start, payoff_months)?,
    })
}

/// Simulate month by month with `extra_payment` added to every payment.
///
/// The simulation stops once the balance is within a cent of zero, or after
/// twice the contractual term. Overpayment in the final month is refunded.
///
/// # Errors
///
/// Returns `InvalidInput` if the term is shorter than one month.
pub fn with_extra_payments(
    principal: f64,
    annual_rate: f64,
    years: f64,
    extra_payment: f64,
    start: Date,
) -> AnalyticsResult<ExtraPaymentPlan> {
    let original_months = whole_months(years)?;
    let monthly_rate = annual_rate / 12.0;
    let regular = level_payment(principal, monthly_rate, f64::from(original_months));

    let original_total_interest = regular * f64::from(original_months) - principal;

    let month_cap = original_months.saturating_mul(2);
    let mut balance = principal;
    let mut new_months = 0u32;
    let mut new_total_paid = 0.0;

    while balance > PAID_OFF_THRESHOLD && new_months < month_cap {
        new_months += 1;
        let interest = balance * monthly_rate;
        balance -= regular - interest + extra_payment;
        new_total_paid += regular + extra_payment;
    }

    if balance < 0.0 {
        new_total_paid += balance;
    }

    let new_total_interest = new_total_paid - principal;

    Ok(ExtraPaymentPlan {
        regular_monthly_payment: regular,
        total_monthly_payment: regular + extra_payment,
        original_payoff_months: original_months,
        new_payoff_months: new_months,
        months_saved: i64::from(original_months) - i64::from(new_months),
        original_total_interest,
        new_total_interest,
        interest_saved: original_total_interest - new_total_interest,
        new_payoff_date: payoff_month(start, new_months)?,
    })
}

fn level_payment(principal: f64, monthly_rate: f64, periods: f64) -> f64 {
    if monthly_rate == 0.0 {
        return principal / periods;
    }
    let growth = (1.0 + monthly_rate).powf(periods);
    principal * monthly_rate * growth / (growth - 1.0)
}

fn whole_months(years: f64) -> AnalyticsResult<u32> {
    let months = (years * 12.0).floor();
    if !(months.is_finite() && months >= 1.0) {
        return Err(AnalyticsError::invalid_input(format!(
            "term of {years} years is shorter than one month"
        )));
    }
    if months > f64::from(u32::MAX) {
        return Err(AnalyticsError::invalid_input(format!(
            "term of {years} years is too long"
        )));
    }
    Ok(months as u32)
}

fn payoff_month(start: Date, months: u32) -> AnalyticsResult<String> {
    let offset = i32::try_from(i64::from(months) - 1)
        .map_err(|_| AnalyticsError::invalid_input(format!("{months} months is out of range")))?;
    Ok(start.start_of_month().add_months(offset)?.year_month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn june_2025() -> Date {
        Date::from_ymd(2025, 6, 17).unwrap()
    }

    #[test]
    fn test_thirty_year_payment() {
        let payment = monthly_payment(300_000.0, 0.04, 30.0).unwrap();
        assert_relative_eq!(payment, 1432.25, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_payment() {
        assert_relative_eq!(monthly_payment(120_000.0, 0.0, 10.0).unwrap(), 1_000.0);
    }

    #[test]
    fn test_schedule_pays_down_to_zero() {
        let schedule = amortization_schedule(100_000.0, 0.05, 15.0, 600).unwrap();

        assert_eq!(schedule.total_payments, 180);
        assert_eq!(schedule.rows.len(), 180);
        assert_eq!(schedule.rows[0].month, 1);
        assert_relative_eq!(schedule.rows[0].interest_payment, 100_000.0 * 0.05 / 12.0);
        assert_eq!(schedule.rows[179].remaining_balance, 0.0);
    }

    #[test]
    fn test_schedule_truncated_by_max_months() {
        let schedule = amortization_schedule(100_000.0, 0.05, 30.0, 12).unwrap();

        assert_eq!(schedule.total_payments, 360);
        assert_eq!(schedule.rows.len(), 12);
        assert!(schedule.rows[11].remaining_balance > 0.0);
    }

    #[test]
    fn test_schedule_rejects_sub_month_term() {
        assert!(matches!(
            amortization_schedule(1_000.0, 0.05, 0.05, 600),
            Err(AnalyticsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_summary() {
        let result = summary(300_000.0, 0.04, 30.0, june_2025()).unwrap();

        assert_eq!(result.payoff_months, 360);
        assert_eq!(result.payoff_date, "2055-05");
        assert_relative_eq!(result.total_paid, result.monthly_payment * 360.0);
        assert_relative_eq!(result.total_interest, result.total_paid - 300_000.0);
    }

    #[test]
    fn test_summary_one_year() {
        let result = summary(12_000.0, 0.0, 1.0, june_2025()).unwrap();
        assert_eq!(result.payoff_date, "2026-05");
        assert_relative_eq!(result.total_interest, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_extra_payments_shorten_loan() {
        let plan = with_extra_payments(300_000.0, 0.04, 30.0, 200.0, june_2025()).unwrap();

        assert_eq!(plan.original_payoff_months, 360);
        assert!(plan.new_payoff_months < 360);
        assert_eq!(plan.months_saved, 360 - i64::from(plan.new_payoff_months));
        assert!(plan.interest_saved > 0.0);
        assert_relative_eq!(plan.total_monthly_payment, plan.regular_monthly_payment + 200.0);
    }

    #[test]
    fn test_no_extra_payment_matches_term() {
        let plan = with_extra_payments(100_000.0, 0.05, 10.0, 0.0, june_2025()).unwrap();

        assert!(plan.new_payoff_months >= 119 && plan.new_payoff_months <= 120);
        assert_relative_eq!(plan.interest_saved, 0.0, epsilon = 1.0);
    }

    #[test]
    fn test_extra_payment_overpayment_refunded() {
        // Extra larger than principal: paid off in the first month
        let plan = with_extra_payments(1_000.0, 0.12, 1.0, 5_000.0, june_2025()).unwrap();

        assert_eq!(plan.new_payoff_months, 1);
        assert_eq!(plan.new_payoff_date, "2025-06");
        // Only one month of interest is paid
        assert_relative_eq!(plan.new_total_interest, 10.0, epsilon = 1e-9);
    }
}
