//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid bind address")]
    InvalidBindAddress,

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed ({})", super::database::MAX_POOL_SIZE)]
    PoolSizeTooLarge,

    #[error("JWT secret must be at least {0} bytes in production")]
    JwtSecretTooShort(usize),

    #[error("Tracking limit '{0}' must be between 1 and 100")]
    InvalidTrackingLimit(&'static str),

    #[error("Forecast cycles must be between 0 and {0}")]
    InvalidForecastCycles(u32),
}
