//! Greeter: a minimal containerized HTTP greeting service.
//!
//! This is the application entry point. It parses CLI arguments, loads
//! configuration from a TOML file (falling back to built-in defaults),
//! initializes tracing in the configured format, sets up the Axum router,
//! and starts the HTTP server with graceful shutdown.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeter::config::{AppConfig, LogFormat, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use greeter::http::start_server;
use greeter::routes::create_router;
use greeter::state::AppState;

/// Greeter: a minimal containerized HTTP greeting service
#[derive(Parser, Debug)]
#[command(name = "greeter", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "greeter=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration before tracing init so the log format is honored
    let config = AppConfig::load_or_default(&args.config)?;

    // Initialize tracing with filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    tracing::info!(config = %args.config, "Loaded configuration");
    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        variant = ?config.greeting.variant,
        "HTTP server configured"
    );

    // Create application state and router
    let state = AppState::new(config.clone());
    let app = create_router(state);

    // Start server (blocks until shutdown)
    start_server(app, &config).await?;

    Ok(())
}
