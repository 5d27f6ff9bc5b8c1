//! # Chatline
//!
//! A full-stack Rust chat application: an Axum backend over SQLite and a
//! Leptos web client (see `chatline-ui/`).
//!
//! ## Modules
//!
//! - [`store`]: SQLite persistence for users, channels and messages
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatline::{serve, ApiConfig, AppState, ChatStore, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (config, _source) = Config::load_default();
//!     let store = ChatStore::open(&config.database.path)?;
//!
//!     let api_config = ApiConfig::from(&config);
//!     serve(AppState::new(store, api_config.clone()), &api_config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod store;

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{
    Config, ConfigError, ConfigSource, DatabaseConfig, LoggingConfig, ServerConfig,
};

pub use store::{
    Channel, ChatStore, Message, MessageQuery, NewMessage, StoreError, StoreResult,
};
