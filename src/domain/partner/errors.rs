//! Partner-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

/// Partner-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartnerError {
    /// The user has no partner profile.
    NotFound(UserId),
    /// The user already has a partner profile.
    AlreadyExists(UserId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl PartnerError {
    pub fn not_found(user_id: UserId) -> Self {
        PartnerError::NotFound(user_id)
    }
    pub fn already_exists(user_id: UserId) -> Self {
        PartnerError::AlreadyExists(user_id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PartnerError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        PartnerError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            PartnerError::NotFound(_) => ErrorCode::PartnerNotFound,
            PartnerError::AlreadyExists(_) => ErrorCode::PartnerAlreadyExists,
            PartnerError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PartnerError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            PartnerError::NotFound(_) => "Partner profile not found".to_string(),
            PartnerError::AlreadyExists(_) => "Partner profile already exists".to_string(),
            PartnerError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PartnerError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PartnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PartnerError {}

impl From<ValidationError> for PartnerError {
    fn from(err: ValidationError) -> Self {
        PartnerError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for PartnerError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => PartnerError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => PartnerError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_hides_user_id() {
        let err = PartnerError::not_found(UserId::new("user-1").unwrap());
        assert_eq!(err.code(), ErrorCode::PartnerNotFound);
        assert_eq!(err.to_string(), "Partner profile not found");
    }

    #[test]
    fn validation_error_converts_with_field() {
        let err: PartnerError = ValidationError::out_of_range("cycle_length", 21, 35, 40).into();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        match err {
            PartnerError::ValidationFailed { field, .. } => assert_eq!(field, "cycle_length"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
