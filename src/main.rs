//! portfolio-demo server entry point.
//!
//! Reads configuration from the environment, initializes tracing, builds the
//! Axum router over the seeded record set, and serves until SIGTERM/SIGINT.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio_demo::build_app;
use portfolio_demo::config::{AppConfig, LogFormat};
use portfolio_demo::http::start_server;

/// Demonstration task service with container health and environment endpoints.
///
/// All settings are read from environment variables; the flags below only
/// override them.
#[derive(Parser, Debug)]
#[command(name = "portfolio-demo", version, about)]
struct Args {
    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "portfolio_demo=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Priority: CLI > env > default (debug-aware)
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| config.default_log_filter().to_string());

    let registry = tracing_subscriber::registry().with(EnvFilter::new(&log_filter));
    match config.logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(
        app_name = %config.app.name,
        version = %config.app.version,
        environment = %config.app.environment,
        debug = config.app.debug,
        namespace = %config.kubernetes.namespace,
        "Loaded configuration"
    );

    let app = build_app(config.clone())?;

    start_server(app, &config).await?;

    Ok(())
}
