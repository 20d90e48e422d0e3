//! Router construction and startup.

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);

    Router::new()
        .nest("/v1", v1_routes())
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// API v1 routes.
fn v1_routes() -> Router<AppState> {
    Router::new()
        // System
        .route("/health", get(routes::system::health))
        .route("/info", get(routes::system::info))
        .route("/echo", post(routes::system::echo))
        // Time value of money
        .route("/tvm/future-value", post(routes::tvm::future_value))
        .route("/tvm/present-value", post(routes::tvm::present_value))
        .route("/tvm/annuity-payment", post(routes::tvm::annuity_payment))
        // Mortgage
        .route("/mortgage/payment", post(routes::mortgage::payment))
        .route(
            "/mortgage/amortization-schedule",
            post(routes::mortgage::amortization_schedule),
        )
        .route("/mortgage/summary", post(routes::mortgage::summary))
        .route(
            "/mortgage/with-extra-payments",
            post(routes::mortgage::with_extra_payments),
        )
        // Bonds
        .route("/bond/yield", post(routes::bonds::calculate_yield))
        .route("/bond/price", post(routes::bonds::calculate_price))
        // XIRR
        .route("/xirr", post(routes::xirr::calculate))
        .route("/xirr/explain", post(routes::xirr::explain))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring invalid CORS origin {origin:?}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Run the server until Ctrl-C.
pub async fn run_server(state: AppState) -> anyhow::Result<()> {
    let addr = state.config.bind_address();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("FinCalc server listening on http://{}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /v1/health");
    tracing::info!("  GET  /v1/info");
    tracing::info!("  POST /v1/tvm/{{future-value,present-value,annuity-payment}}");
    tracing::info!("  POST /v1/mortgage/{{payment,amortization-schedule,summary,with-extra-payments}}");
    tracing::info!("  POST /v1/bond/{{yield,price}}");
    tracing::info!("  POST /v1/xirr");
    tracing::info!("  POST /v1/xirr/explain");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl-C handler: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
