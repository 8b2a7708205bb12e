//! Daily-log error types.

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

/// Daily-log errors. Logs are addressed by date within a partner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyLogError {
    PartnerNotFound(UserId),
    NotFound(NaiveDate),
    AlreadyExists(NaiveDate),
    /// A range query whose start is after its end.
    InvalidRange { start: NaiveDate, end: NaiveDate },
    ValidationFailed { field: String, message: String },
    Infrastructure(String),
}

impl DailyLogError {
    pub fn partner_not_found(user_id: UserId) -> Self {
        DailyLogError::PartnerNotFound(user_id)
    }
    pub fn not_found(date: NaiveDate) -> Self {
        DailyLogError::NotFound(date)
    }
    pub fn already_exists(date: NaiveDate) -> Self {
        DailyLogError::AlreadyExists(date)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DailyLogError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        DailyLogError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            DailyLogError::PartnerNotFound(_) => ErrorCode::PartnerNotFound,
            DailyLogError::NotFound(_) => ErrorCode::DailyLogNotFound,
            DailyLogError::AlreadyExists(_) => ErrorCode::DailyLogAlreadyExists,
            DailyLogError::InvalidRange { .. } | DailyLogError::ValidationFailed { .. } => {
                ErrorCode::ValidationFailed
            }
            DailyLogError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            DailyLogError::PartnerNotFound(_) => "Partner profile not found".to_string(),
            DailyLogError::NotFound(date) => format!("Daily log not found for {}", date),
            DailyLogError::AlreadyExists(date) => format!("Daily log already exists for {}", date),
            DailyLogError::InvalidRange { start, end } => {
                format!("Start date {} is after end date {}", start, end)
            }
            DailyLogError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            DailyLogError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for DailyLogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DailyLogError {}

impl From<ValidationError> for DailyLogError {
    fn from(err: ValidationError) -> Self {
        DailyLogError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for DailyLogError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => DailyLogError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => DailyLogError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_is_a_validation_failure() {
        let start = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let err = DailyLogError::InvalidRange { start, end };
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.message(), "Start date 2025-02-01 is after end date 2025-01-01");
    }

    #[test]
    fn domain_validation_error_keeps_field_detail() {
        let domain: DomainError = ValidationError::out_of_range("energy_level", 1, 5, 9).into();
        match DailyLogError::from(domain) {
            DailyLogError::ValidationFailed { field, .. } => assert_eq!(field, "energy_level"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
