//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over the configured `server.log_level` directive. Production
//! emits JSON lines; other environments get the human-readable formatter.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use crate::config::{Environment, ServerConfig};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn for_environment(environment: &Environment) -> Self {
        match environment {
            Environment::Production => LogFormat::Json,
            Environment::Development | Environment::Staging => LogFormat::Pretty,
        }
    }
}

/// Filter from `RUST_LOG`, falling back to `default_directive`.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(server: &ServerConfig) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(&server.log_level));

    match LogFormat::for_environment(&server.environment) {
        LogFormat::Json => registry
            .with(fmt::layer().with_target(true).json())
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init(),
    }
}
