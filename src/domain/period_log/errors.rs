//! Period-log error types.

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, ErrorCode, PeriodLogId, UserId, ValidationError};

/// Period-log errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodLogError {
    /// The user has no partner profile.
    PartnerNotFound(UserId),
    /// No log with this id belongs to the user's partner.
    NotFound(PeriodLogId),
    /// An actual log already starts on this date.
    AlreadyExists(NaiveDate),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl PeriodLogError {
    pub fn partner_not_found(user_id: UserId) -> Self {
        PeriodLogError::PartnerNotFound(user_id)
    }
    pub fn not_found(id: PeriodLogId) -> Self {
        PeriodLogError::NotFound(id)
    }
    pub fn already_exists(start_date: NaiveDate) -> Self {
        PeriodLogError::AlreadyExists(start_date)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PeriodLogError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        PeriodLogError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            PeriodLogError::PartnerNotFound(_) => ErrorCode::PartnerNotFound,
            PeriodLogError::NotFound(_) => ErrorCode::PeriodLogNotFound,
            PeriodLogError::AlreadyExists(_) => ErrorCode::PeriodLogAlreadyExists,
            PeriodLogError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PeriodLogError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            PeriodLogError::PartnerNotFound(_) => "Partner profile not found".to_string(),
            PeriodLogError::NotFound(id) => format!("Period log not found: {}", id),
            PeriodLogError::AlreadyExists(date) => {
                format!("Period log already exists for {}", date)
            }
            PeriodLogError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PeriodLogError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PeriodLogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PeriodLogError {}

impl From<ValidationError> for PeriodLogError {
    fn from(err: ValidationError) -> Self {
        PeriodLogError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for PeriodLogError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => PeriodLogError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => PeriodLogError::Infrastructure(err.to_string()),
        }
    }
}
