//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `RED_RECON` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use red_recon::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod auth;
mod database;
mod error;
mod server;
mod tracking;

pub use auth::{AuthConfig, MIN_PRODUCTION_SECRET_LEN};
pub use database::{DatabaseConfig, MAX_POOL_SIZE};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig, MAX_REQUEST_TIMEOUT_SECS};
pub use tracking::{TrackingConfig, MAX_FORECAST_CYCLES};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection pool)
    pub database: DatabaseConfig,

    /// Authentication configuration (JWT shared secret)
    pub auth: AuthConfig,

    /// Query limits and forecast depth
    #[serde(default)]
    pub tracking: TrackingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `RED_RECON__SECTION__KEY`
    /// variables into the typed sections.
    ///
    /// - `RED_RECON__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `RED_RECON__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RED_RECON")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.tracking.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
