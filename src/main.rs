//! Chatline API Server
//!
//! Run with: cargo run --bin chatline
//!
//! # Configuration
//!
//! Settings are read from `config.toml` (see `chatline-cli config`), then
//! environment variables, then command-line flags:
//! - `CHATLINE_HOST` / `--host`: Host to bind to (default: 0.0.0.0)
//! - `CHATLINE_PORT` / `--port`: Port to listen on (default: 8080)
//! - `CHATLINE_DATABASE` / `--database`: SQLite file (default: chatline.db)
//! - `CHATLINE_LOG_LEVEL`, `CHATLINE_LOG_FORMAT`: Logging (pretty or json)
//! - `RUST_LOG`: Overrides the configured log filter

use anyhow::Context;
use chatline::{serve, ApiConfig, AppState, ChatStore, Config, ConfigSource, LoggingConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "chatline")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Chatline chat server")]
struct Args {
    /// Config file (default: search the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// SQLite database file
    #[arg(long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, source) = match &args.config {
        Some(path) => (
            Config::load_with_env(path)?,
            ConfigSource {
                path: Some(path.clone()),
                ..Default::default()
            },
        ),
        None => Config::load_default(),
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(database) = args.database {
        config.database.path = database;
    }

    init_tracing(&config.logging);
    source.log();

    tracing::info!("Starting Chatline server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Database: {}", config.database.path);

    let store = ChatStore::open(&config.database.path)
        .with_context(|| format!("Failed to open database {}", config.database.path))?;

    let api_config = ApiConfig::from(&config);
    let state = AppState::new(store, api_config.clone());

    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("Chatline server stopped");
    Ok(())
}

/// Install the global tracing subscriber
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("chatline={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
