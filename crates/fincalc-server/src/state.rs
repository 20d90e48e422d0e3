//! Application state.

use std::sync::Arc;

use fincalc_analytics::solve::{strategy_for, ExecutionGuard, RootStrategy};
use fincalc_analytics::prelude::SolverCapability;

use crate::config::ServerConfig;

/// Application state shared across handlers.
///
/// Read-only after startup; requests share no mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<ServerConfig>,

    /// Root strategy selected once for the process.
    pub strategy: Arc<dyn RootStrategy>,

    /// Timeout wrapper for solver work.
    pub guard: ExecutionGuard,

    /// Process start time reported by `/v1/info`.
    pub build_timestamp: Arc<str>,
}

impl AppState {
    /// Resolves solver capability and builds the state.
    pub fn new(config: ServerConfig) -> Self {
        let capability = SolverCapability::detect();
        let strategy = strategy_for(capability, config.solver);
        tracing::info!(
            "solver capability: {capability}, strategy: {}, timeout: {}s",
            strategy.name(),
            config.solver_timeout_secs
        );

        Self {
            guard: ExecutionGuard::new(config.solver_timeout()),
            config: Arc::new(config),
            strategy,
            build_timestamp: chrono::Utc::now().to_rfc3339().into(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
