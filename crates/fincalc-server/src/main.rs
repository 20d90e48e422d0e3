//! FinCalc server binary.

use std::path::PathBuf;

use clap::Parser;
use fincalc_server::{run_server, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_CONFIG: &str = "config/fincalc.toml";

/// Stateless financial calculation API
#[derive(Parser, Debug)]
#[command(name = "fincalc-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML configuration file (defaults to config/fincalc.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "debug,tower_http=debug"
    } else {
        "info,fincalc=debug"
    };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("FinCalc server v{}", env!("CARGO_PKG_VERSION"));

    let config_path = args.config.or_else(|| {
        let default = PathBuf::from(DEFAULT_CONFIG);
        default.exists().then_some(default)
    });
    match &config_path {
        Some(path) => tracing::info!("Loading configuration from {}", path.display()),
        None => tracing::info!("Using default configuration"),
    }

    let mut config = ServerConfig::load(config_path.as_deref())?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    run_server(AppState::new(config)).await
}
