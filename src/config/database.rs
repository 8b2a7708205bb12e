//! PostgreSQL pool configuration

use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use super::error::ValidationError;

/// Hard ceiling on pool size.
pub const MAX_POOL_SIZE: u32 = 100;

/// Connection pool settings for the log store.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `postgres://` or `postgresql://` URL
    pub url: String,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,

    /// Apply embedded migrations before serving
    #[serde(default)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Pool options with the configured sizes and timeouts.
    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .min_connections(self.min_connections)
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Some(Duration::from_secs(self.idle_timeout_secs)))
            .max_lifetime(Some(Duration::from_secs(self.max_lifetime_secs)))
    }

    /// URL with any password replaced, safe for logs.
    pub fn redacted_url(&self) -> String {
        let Some((scheme, rest)) = self.url.split_once("://") else {
            return self.url.clone();
        };
        match rest.split_once('@') {
            Some((credentials, host)) => {
                let user = credentials.split(':').next().unwrap_or_default();
                format!("{}://{}:***@{}", scheme, user, host)
            }
            None => self.url.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("RED_RECON__DATABASE__URL"));
        }
        if !["postgres://", "postgresql://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
        {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.max_connections > MAX_POOL_SIZE {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        if self.min_connections > self.max_connections {
            return Err(ValidationError::InvalidPoolSize);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            run_migrations: false,
        }
    }
}

fn default_min_connections() -> u32 {
    5
}

fn default_max_connections() -> u32 {
    20
}

fn default_acquire_timeout() -> u64 {
    30
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_max_lifetime() -> u64 {
    1800
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn pool_options_carry_configured_values() {
        let config = DatabaseConfig {
            min_connections: 2,
            max_connections: 8,
            acquire_timeout_secs: 10,
            ..with_url("postgres://localhost/red_recon")
        };
        let options = config.pool_options();
        assert_eq!(options.get_min_connections(), 2);
        assert_eq!(options.get_max_connections(), 8);
        assert_eq!(options.get_acquire_timeout(), Duration::from_secs(10));
        assert!(!config.run_migrations);
    }

    #[test]
    fn url_scheme_is_checked() {
        assert_eq!(
            DatabaseConfig::default().validate(),
            Err(ValidationError::MissingRequired("RED_RECON__DATABASE__URL"))
        );
        assert_eq!(
            with_url("mysql://localhost/red_recon").validate(),
            Err(ValidationError::InvalidDatabaseUrl)
        );
        assert!(with_url("postgresql://user:pw@db:5432/red_recon").validate().is_ok());
    }

    #[test]
    fn pool_bounds_are_checked() {
        let inverted = DatabaseConfig {
            min_connections: 10,
            max_connections: 5,
            ..with_url("postgres://localhost/red_recon")
        };
        assert_eq!(inverted.validate(), Err(ValidationError::InvalidPoolSize));

        let oversized = DatabaseConfig {
            max_connections: 150,
            ..with_url("postgres://localhost/red_recon")
        };
        assert_eq!(oversized.validate(), Err(ValidationError::PoolSizeTooLarge));
    }

    #[test]
    fn redacted_url_hides_password() {
        assert_eq!(
            with_url("postgres://app:hunter2@db:5432/red_recon").redacted_url(),
            "postgres://app:***@db:5432/red_recon"
        );
        assert_eq!(
            with_url("postgres://localhost/red_recon").redacted_url(),
            "postgres://localhost/red_recon"
        );
    }
}
