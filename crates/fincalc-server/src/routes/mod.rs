//! Route handlers, one module per endpoint group.

pub mod bonds;
pub mod mortgage;
pub mod system;
pub mod tvm;
pub mod xirr;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
