//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;
use crate::adapters::auth::JwtConfig;

/// Shortest HS256 secret accepted in production.
pub const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Shared-secret JWT settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: SecretString,

    /// Expected `iss` claim, if any
    pub jwt_issuer: Option<String>,

    /// Expected `aud` claim, if any
    pub jwt_audience: Option<String>,
}

impl AuthConfig {
    /// Settings for the JWT session validator.
    pub fn jwt_config(&self) -> JwtConfig {
        let mut config = JwtConfig::new(self.jwt_secret.clone());
        if let Some(issuer) = &self.jwt_issuer {
            config = config.with_issuer(issuer.clone());
        }
        if let Some(audience) = &self.jwt_audience {
            config = config.with_audience(audience.clone());
        }
        config
    }

    /// Validate authentication configuration
    ///
    /// Production deployments need a secret of at least
    /// [`MIN_PRODUCTION_SECRET_LEN`] bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("RED_RECON__AUTH__JWT_SECRET"));
        }
        if *environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_LEN {
            return Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_LEN));
        }
        Ok(())
    }
}
