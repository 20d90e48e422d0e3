//! Server configuration.
//!
//! Values come from an optional TOML file, then environment overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use fincalc_analytics::solve::SolverPreference;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard ceiling on cash flows per XIRR request.
pub const MAX_XIRR_CASHFLOWS: usize = 1000;

/// Hard ceiling on amortization rows per request.
pub const MAX_AMORTIZATION_MONTHS: u32 = 600;

/// Hard ceiling on any loan, bond or TVM term, in years.
pub const MAX_TERM_YEARS: f64 = 100.0;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`ServerConfig`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// An environment override could not be parsed.
    #[error("invalid value '{value}' for {key}")]
    InvalidOverride {
        /// Environment variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },

    /// A value is outside its allowed range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed by CORS
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Wall-clock budget for one solve, in seconds
    #[serde(default = "default_solver_timeout_secs")]
    pub solver_timeout_secs: u64,

    /// Maximum cash flows accepted by the XIRR endpoints
    #[serde(default = "default_max_xirr_cashflows")]
    pub max_xirr_cashflows: usize,

    /// Maximum rows returned by the amortization endpoint
    #[serde(default = "default_max_amortization_months")]
    pub max_amortization_months: u32,

    /// Largest absolute monetary amount accepted
    #[serde(default = "default_max_amount")]
    pub max_amount: f64,

    /// Longest term accepted by the TVM, mortgage and bond endpoints
    #[serde(default = "default_max_term_years")]
    pub max_term_years: f64,

    /// Root strategy preference
    #[serde(default)]
    pub solver: SolverPreference,

    /// Deployment environment reported by `/v1/info`
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Commit reported by `/v1/info`
    #[serde(default = "default_git_sha")]
    pub git_sha: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> Vec<String> {
    [
        "http://localhost:8000",
        "http://127.0.0.1:8000",
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "https://mytherapy-coding.github.io",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_solver_timeout_secs() -> u64 {
    5
}

fn default_max_xirr_cashflows() -> usize {
    MAX_XIRR_CASHFLOWS
}

fn default_max_amortization_months() -> u32 {
    MAX_AMORTIZATION_MONTHS
}

fn default_max_amount() -> f64 {
    1e12
}

fn default_max_term_years() -> f64 {
    MAX_TERM_YEARS
}

fn default_environment() -> String {
    "production".to_string()
}

fn default_git_sha() -> String {
    "unknown".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            solver_timeout_secs: default_solver_timeout_secs(),
            max_xirr_cashflows: default_max_xirr_cashflows(),
            max_amortization_months: default_max_amortization_months(),
            max_amount: default_max_amount(),
            max_term_years: default_max_term_years(),
            solver: SolverPreference::default(),
            environment: default_environment(),
            git_sha: default_git_sha(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file if given (defaults otherwise), then applies the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Applies overrides from `lookup`, keyed by environment variable name.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(sha) = lookup("GIT_SHA") {
            self.git_sha = sha;
        }
        if let Some(environment) = lookup("ENVIRONMENT") {
            self.environment = environment;
        }
        if let Some(host) = lookup("FINCALC_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("FINCALC_PORT") {
            self.port = parse_override("FINCALC_PORT", port)?;
        }
        if let Some(secs) = lookup("FINCALC_SOLVER_TIMEOUT_SECS") {
            self.solver_timeout_secs = parse_override("FINCALC_SOLVER_TIMEOUT_SECS", secs)?;
        }
        self.validate()
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.solver_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "solver_timeout_secs must be greater than 0".into(),
            ));
        }
        if !(2..=MAX_XIRR_CASHFLOWS).contains(&self.max_xirr_cashflows) {
            return Err(ConfigError::Invalid(format!(
                "max_xirr_cashflows must be in [2, {MAX_XIRR_CASHFLOWS}], got {}",
                self.max_xirr_cashflows
            )));
        }
        if !(1..=MAX_AMORTIZATION_MONTHS).contains(&self.max_amortization_months) {
            return Err(ConfigError::Invalid(format!(
                "max_amortization_months must be in [1, {MAX_AMORTIZATION_MONTHS}], got {}",
                self.max_amortization_months
            )));
        }
        if !(self.max_amount.is_finite() && self.max_amount > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max_amount must be positive, got {}",
                self.max_amount
            )));
        }
        if !(self.max_term_years > 0.0 && self.max_term_years <= MAX_TERM_YEARS) {
            return Err(ConfigError::Invalid(format!(
                "max_term_years must be in (0, {MAX_TERM_YEARS}], got {}",
                self.max_term_years
            )));
        }
        Ok(())
    }

    /// Address string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Solver budget as a duration.
    pub fn solver_timeout(&self) -> Duration {
        Duration::from_secs(self.solver_timeout_secs)
    }
}

fn parse_override<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidOverride { key, value })
}
