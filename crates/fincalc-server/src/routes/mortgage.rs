//! Mortgage endpoints.

use axum::{extract::State, Json};
use fincalc_analytics::mortgage;
use fincalc_core::Date;

use crate::dto::{
    money, AmortizationScheduleRequest, AmortizationScheduleResponse, Envelope,
    ExtraPaymentsRequest, ExtraPaymentsResponse, Limits, MortgagePaymentResponse,
    MortgageRequest, MortgageSummaryResponse,
};
use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::state::AppState;

const OPERATION: &str = "Failed to calculate mortgage";

fn calc_err(err: fincalc_analytics::AnalyticsError) -> ApiError {
    ApiError::from_analytics(err, OPERATION)
}

/// Monthly payment of a fixed-rate loan.
pub async fn payment(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<MortgageRequest>,
) -> ApiResult<Json<Envelope<MortgagePaymentResponse>>> {
    req.validate(&Limits::from(state.config.as_ref()))?;

    let monthly = mortgage::monthly_payment(req.principal, req.annual_rate, req.years)
        .map_err(calc_err)?;

    Ok(Envelope::ok(MortgagePaymentResponse {
        monthly_payment: money(monthly),
    }))
}

/// Payment-by-payment breakdown, capped at `max_months` rows.
pub async fn amortization_schedule(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AmortizationScheduleRequest>,
) -> ApiResult<Json<Envelope<AmortizationScheduleResponse>>> {
    let limits = Limits::from(state.config.as_ref());
    req.validate(&limits)?;

    if req.max_months > limits.max_months {
        return Err(ApiError::TooManyMonths {
            limit: limits.max_months,
            requested: req.max_months,
        });
    }

    let schedule = mortgage::amortization_schedule(
        req.loan.principal,
        req.loan.annual_rate,
        req.loan.years,
        req.max_months,
    )
    .map_err(calc_err)?;

    Ok(Envelope::ok(schedule.into()))
}

/// Lifetime totals and payoff month, counting from the current month.
pub async fn summary(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<MortgageRequest>,
) -> ApiResult<Json<Envelope<MortgageSummaryResponse>>> {
    req.validate(&Limits::from(state.config.as_ref()))?;

    let summary = mortgage::summary(req.principal, req.annual_rate, req.years, Date::today())
        .map_err(calc_err)?;

    Ok(Envelope::ok(summary.into()))
}

/// Payoff acceleration from a constant extra monthly payment.
pub async fn with_extra_payments(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ExtraPaymentsRequest>,
) -> ApiResult<Json<Envelope<ExtraPaymentsResponse>>> {
    req.validate(&Limits::from(state.config.as_ref()))?;

    let plan = mortgage::with_extra_payments(
        req.loan.principal,
        req.loan.annual_rate,
        req.loan.years,
        req.extra_monthly_payment,
        Date::today(),
    )
    .map_err(calc_err)?;

    Ok(Envelope::ok(plan.into()))
}
