//! Bond endpoints.

use axum::{extract::State, Json};
use fincalc_analytics::bonds::{price_at_yield, yield_to_maturity};

use crate::dto::{
    price, rate, BondPriceRequest, BondPriceResponse, BondYieldRequest, BondYieldResponse,
    Envelope, Limits,
};
use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::state::AppState;

/// Solve for yield to maturity under the execution guard.
pub async fn calculate_yield(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<BondYieldRequest>,
) -> ApiResult<Json<Envelope<BondYieldResponse>>> {
    let terms = req.to_terms(&Limits::from(state.config.as_ref()))?;
    let current_price = req.current_price;
    let strategy = state.strategy.clone();

    let outcome = state
        .guard
        .run(move |cancel| yield_to_maturity(strategy.as_ref(), &terms, current_price, &cancel))
        .await
        .map_err(|e| ApiError::from_analytics(e, "Failed to calculate bond yield"))?;

    for warning in &outcome.warnings {
        tracing::warn!("bond yield: {warning}");
    }

    Ok(Envelope::ok(BondYieldResponse {
        yield_to_maturity: rate(outcome.rate),
    }))
}

/// Closed-form price at a yield; the term ceiling bounds the work.
pub async fn calculate_price(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<BondPriceRequest>,
) -> ApiResult<Json<Envelope<BondPriceResponse>>> {
    let terms = req.to_terms(&Limits::from(state.config.as_ref()))?;

    Ok(Envelope::ok(BondPriceResponse {
        price: price(price_at_yield(&terms, req.yield_to_maturity)),
    }))
}
