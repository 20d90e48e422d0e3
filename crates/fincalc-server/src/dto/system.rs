//! System DTOs.

use serde::{Deserialize, Serialize};

/// Service name reported by the system endpoints.
pub const SERVICE_NAME: &str = "finance-api";

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub version: &'static str,
}

/// Service metadata response.
#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub build_timestamp: String,
    pub git_sha: String,
}

/// Echo payload, returned verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EchoRequest {
    /// Message to echo back.
    pub message: String,

    /// Optional number to include in the response.
    #[serde(default)]
    pub number: Option<i64>,
}

/// Echo response.
#[derive(Debug, Clone, Serialize)]
pub struct EchoResponse {
    pub echo: EchoRequest,
}
