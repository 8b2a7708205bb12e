//! Command infrastructure for write-side handlers.
//!
//! Every command handler takes a `CommandMetadata` alongside its command so
//! that the acting user and the request correlation id travel together and
//! show up in the handler's log lines.

use uuid::Uuid;

use super::UserId;

/// Metadata context for command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMetadata {
    /// The user executing this command.
    pub user_id: UserId,

    /// Links related operations across a single user request.
    correlation_id: Option<String>,
}

impl CommandMetadata {
    /// Creates new command metadata with required user ID.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            correlation_id: None,
        }
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Returns the correlation ID, generating one if not set.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
impl CommandMetadata {
    /// Creates a test fixture with a test user ID.
    pub fn test_fixture() -> Self {
        Self::new(UserId::new("test-user-123").unwrap()).with_correlation_id("test-correlation-id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_correlation_id_is_returned() {
        let metadata = CommandMetadata::new(UserId::new("user-456").unwrap())
            .with_correlation_id("corr-123");

        assert_eq!(metadata.correlation_id(), "corr-123");
    }

    #[test]
    fn correlation_id_generates_if_missing() {
        let metadata = CommandMetadata::new(UserId::new("user").unwrap());
        assert!(Uuid::parse_str(&metadata.correlation_id()).is_ok());
    }
}
