//! Session validation port for bearer token validation.
//!
//! Defines the contract for validating access tokens and extracting the
//! app user's identity. It is provider-agnostic: the shipped adapters are a
//! shared-secret JWT validator and a mock for tests.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// HTTP middleware uses this to validate Bearer tokens and attach the
/// authenticated user to the request.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature and expiry
/// - Validate issuer and audience when configured
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
