//! Health, info and echo endpoints.

use axum::{extract::State, Json};

use crate::dto::{
    EchoRequest, EchoResponse, Envelope, HealthResponse, InfoResponse, SERVICE_NAME,
};
use crate::extract::ApiJson;
use crate::state::AppState;

/// Liveness check.
pub async fn health() -> Json<Envelope<HealthResponse>> {
    Envelope::ok(HealthResponse {
        service: SERVICE_NAME,
        version: "v1",
    })
}

/// Deployment metadata.
pub async fn info(State(state): State<AppState>) -> Json<Envelope<InfoResponse>> {
    Envelope::ok(InfoResponse {
        service: SERVICE_NAME,
        version: "1.0.0",
        environment: state.config.environment.clone(),
        build_timestamp: state.build_timestamp.to_string(),
        git_sha: state.config.git_sha.clone(),
    })
}

/// Returns the payload unchanged.
pub async fn echo(ApiJson(payload): ApiJson<EchoRequest>) -> Json<Envelope<EchoResponse>> {
    Envelope::ok(EchoResponse { echo: payload })
}
