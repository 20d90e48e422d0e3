//! XIRR endpoints.

use axum::{extract::State, Json};
use fincalc_analytics::xirr::{explain_xirr, xirr};

use crate::dto::{rate, Envelope, Limits, XirrExplainResponse, XirrRequest, XirrResponse};
use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::state::AppState;

const OPERATION: &str = "Failed to calculate XIRR";

/// Rate of return for dated cash flows.
pub async fn calculate(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<XirrRequest>,
) -> ApiResult<Json<Envelope<XirrResponse>>> {
    let series = req.to_series(&Limits::from(state.config.as_ref()))?;
    let guess = req.initial_guess;
    let strategy = state.strategy.clone();

    let outcome = state
        .guard
        .run(move |cancel| xirr(strategy.as_ref(), &series, guess, &cancel))
        .await
        .map_err(|e| ApiError::from_analytics(e, OPERATION))?;

    Ok(Envelope::ok(XirrResponse {
        xirr: rate(outcome.rate),
    }))
}

/// Rate plus iterations, solver label and multiple-root warnings.
pub async fn explain(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<XirrRequest>,
) -> ApiResult<Json<Envelope<XirrExplainResponse>>> {
    let series = req.to_series(&Limits::from(state.config.as_ref()))?;
    let guess = req.initial_guess;
    let strategy = state.strategy.clone();

    let outcome = state
        .guard
        .run(move |cancel| explain_xirr(strategy.as_ref(), &series, guess, &cancel))
        .await
        .map_err(|e| ApiError::from_analytics(e, OPERATION))?;

    tracing::debug!(
        cashflows = req.cashflows.len(),
        iterations = outcome.iterations,
        method = %outcome.method,
        "xirr explained"
    );

    Ok(Envelope::ok(outcome.into()))
}
