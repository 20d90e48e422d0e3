//! Time value of money endpoints.

use axum::{extract::State, Json};
use fincalc_analytics::tvm;

use crate::dto::{
    money, AnnuityPaymentRequest, AnnuityPaymentResponse, Envelope, FutureValueRequest,
    FutureValueResponse, Limits, PresentValueRequest, PresentValueResponse,
};
use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::state::AppState;

const OPERATION: &str = "Failed to calculate time value of money";

/// `FV = P (1 + r/n)^(n t)`.
pub async fn future_value(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<FutureValueRequest>,
) -> ApiResult<Json<Envelope<FutureValueResponse>>> {
    req.validate(&Limits::from(state.config.as_ref()))?;

    let fv = tvm::future_value(req.principal, req.annual_rate, req.years, req.compounds_per_year)
        .map_err(|e| ApiError::from_analytics(e, OPERATION))?;

    Ok(Envelope::ok(FutureValueResponse {
        future_value: money(fv),
    }))
}

/// `PV = FV / (1 + r/n)^(n t)`.
pub async fn present_value(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PresentValueRequest>,
) -> ApiResult<Json<Envelope<PresentValueResponse>>> {
    req.validate(&Limits::from(state.config.as_ref()))?;

    let pv = tvm::present_value(
        req.future_value,
        req.annual_rate,
        req.years,
        req.compounds_per_year,
    );

    Ok(Envelope::ok(PresentValueResponse {
        present_value: money(pv),
    }))
}

/// Level payment of a fixed-term annuity.
pub async fn annuity_payment(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AnnuityPaymentRequest>,
) -> ApiResult<Json<Envelope<AnnuityPaymentResponse>>> {
    req.validate(&Limits::from(state.config.as_ref()))?;

    let payment = tvm::annuity_payment(
        req.present_value,
        req.annual_rate,
        req.years,
        req.payments_per_year,
    )
    .map_err(|e| ApiError::from_analytics(e, OPERATION))?;

    Ok(Envelope::ok(AnnuityPaymentResponse {
        payment: money(payment),
    }))
}
