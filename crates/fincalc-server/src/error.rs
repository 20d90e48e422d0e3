//! API error types and the error envelope.

use std::time::Duration;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fincalc_analytics::AnalyticsError;
use serde::Serialize;
use thiserror::Error;

/// API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or out-of-range request fields, as `"field: reason"` lines.
    #[error("Request validation failed")]
    Validation(Vec<String>),

    /// More cash flows than the effective limit.
    #[error("Maximum {limit} cash flows allowed")]
    TooManyCashFlows {
        /// Effective limit for the request.
        limit: usize,
        /// Number received.
        received: usize,
    },

    /// More amortization rows requested than configured.
    #[error("Maximum {limit} months allowed")]
    TooManyMonths {
        /// Configured limit.
        limit: u32,
        /// Number requested.
        requested: u32,
    },

    /// No rate zeroes the residual in the searched bracket.
    #[error("{message}")]
    NoSolution {
        /// Human-readable reason.
        message: String,
        /// Diagnostic residuals.
        details: Vec<String>,
    },

    /// The solver exceeded its wall-clock budget.
    #[error("Solver exceeded timeout of {} seconds", .0.as_secs())]
    SolverTimeout(Duration),

    /// Any other solver failure, already prefixed with the operation.
    #[error("{0}")]
    SolverError(String),

    /// No route matches the request.
    #[error("Not Found")]
    NotFound(String),
}

impl ApiError {
    /// Creates a validation error with a single detail line.
    pub fn validation(field: &str, reason: impl std::fmt::Display) -> Self {
        ApiError::Validation(vec![format!("{field}: {reason}")])
    }

    /// Maps a calculation failure, prefixing solver errors with `operation`
    /// (e.g. `"Failed to calculate XIRR"`).
    pub fn from_analytics(err: AnalyticsError, operation: &str) -> Self {
        match err {
            AnalyticsError::InvalidInput(reason) => ApiError::Validation(vec![reason]),
            AnalyticsError::NoSolution { message, details } => {
                ApiError::NoSolution { message, details }
            }
            AnalyticsError::SolverTimeout { timeout } => ApiError::SolverTimeout(timeout),
            AnalyticsError::SolverError(message) => {
                ApiError::SolverError(format!("{operation}: {message}"))
            }
        }
    }

    /// Machine-readable code and HTTP status.
    pub fn code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            ApiError::TooManyCashFlows { .. } => (StatusCode::BAD_REQUEST, "TOO_MANY_CASHFLOWS"),
            ApiError::TooManyMonths { .. } => (StatusCode::BAD_REQUEST, "TOO_MANY_MONTHS"),
            ApiError::NoSolution { .. } => (StatusCode::BAD_REQUEST, "NO_SOLUTION"),
            ApiError::SolverTimeout(_) => (StatusCode::REQUEST_TIMEOUT, "SOLVER_TIMEOUT"),
            ApiError::SolverError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "SOLVER_ERROR"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        }
    }

    fn details(&self) -> Vec<String> {
        match self {
            ApiError::Validation(details) | ApiError::NoSolution { details, .. } => details.clone(),
            ApiError::TooManyCashFlows { received, .. } => {
                vec![format!("Received {received} cash flows")]
            }
            ApiError::TooManyMonths { requested, .. } => {
                vec![format!("Requested {requested} months")]
            }
            ApiError::NotFound(path) => vec![path.clone()],
            ApiError::SolverTimeout(_) | ApiError::SolverError(_) => Vec::new(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always `false`.
    pub ok: bool,
    /// Error payload.
    pub error: ErrorBody,
}

/// Error body details.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Stable machine-readable code.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Additional context, possibly empty.
    pub details: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.code();

        match &self {
            ApiError::SolverTimeout(timeout) => {
                tracing::warn!(timeout_secs = timeout.as_secs(), "solver timed out");
            }
            ApiError::SolverError(message) => tracing::error!("{message}"),
            _ => tracing::debug!(code, "request rejected: {self}"),
        }

        let body = Json(ErrorResponse {
            ok: false,
            error: ErrorBody {
                code,
                message: self.to_string(),
                details: self.details(),
            },
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation("body", rejection.body_text())
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
