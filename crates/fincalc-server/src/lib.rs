//! FinCalc HTTP server.
//!
//! Stateless JSON API over the FinCalc calculation engine.
//!
//! ## Features
//!
//! - Time value of money: future value, present value, annuity payment
//! - Mortgage: payment, amortization schedule, summary, extra payments
//! - Bond price and yield to maturity
//! - XIRR, with an explain variant reporting solver diagnostics
//!
//! Bond yield and XIRR run under a per-request timeout; every failure is
//! returned as `{ "ok": false, "error": { code, message, details } }`.
//!
//! ## Usage
//!
//! ```bash
//! # Defaults (0.0.0.0:8000)
//! fincalc-server
//!
//! # Config file plus overrides
//! fincalc-server --config config/fincalc.toml --port 9000 --verbose
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::{create_router, run_server};
pub use state::AppState;
