//! Error types for the domain layer.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Earliest year accepted on user-supplied dates.
pub const MIN_SUPPORTED_YEAR: i32 = 1900;

/// Latest year accepted on user-supplied dates.
pub const MAX_SUPPORTED_YEAR: i32 = 2200;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' must be at most {max} characters, got {actual}")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a too-long validation error.
    pub fn too_long(field: impl Into<String>, max: usize, actual: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }

    /// Checks an integer against an inclusive range.
    pub fn check_range(field: &str, value: i32, min: i32, max: i32) -> Result<(), Self> {
        if value < min || value > max {
            return Err(Self::out_of_range(field, min, max, value));
        }
        Ok(())
    }

    /// Checks that a date falls within the supported calendar years.
    pub fn check_date(field: &str, date: NaiveDate) -> Result<(), Self> {
        if (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&date.year()) {
            return Ok(());
        }
        Err(Self::invalid_format(
            field,
            format!(
                "year must be between {} and {}",
                MIN_SUPPORTED_YEAR, MAX_SUPPORTED_YEAR
            ),
        ))
    }

    /// Checks an optional free-text field against a character limit.
    pub fn check_length(field: &str, value: Option<&str>, max: usize) -> Result<(), Self> {
        match value {
            Some(text) if text.chars().count() > max => {
                Err(Self::too_long(field, max, text.chars().count()))
            }
            _ => Ok(()),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    PartnerNotFound,
    PeriodLogNotFound,
    DailyLogNotFound,

    // Conflict errors
    PartnerAlreadyExists,
    PeriodLogAlreadyExists,
    DailyLogAlreadyExists,

    // Authorization errors
    Unauthorized,
    Forbidden,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::PartnerNotFound => "PARTNER_NOT_FOUND",
            ErrorCode::PeriodLogNotFound => "PERIOD_LOG_NOT_FOUND",
            ErrorCode::DailyLogNotFound => "DAILY_LOG_NOT_FOUND",
            ErrorCode::PartnerAlreadyExists => "PARTNER_ALREADY_EXISTS",
            ErrorCode::PeriodLogAlreadyExists => "PERIOD_LOG_ALREADY_EXISTS",
            ErrorCode::DailyLogAlreadyExists => "DAILY_LOG_ALREADY_EXISTS",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a database error, prefixing the failed operation.
    pub fn database(operation: &str, cause: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::DatabaseError,
            format!("Failed to {}: {}", operation, cause),
        )
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        DomainError::new(ErrorCode::ValidationFailed, err.to_string()).with_detail("field", field)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("cycle_length", 21, 35, 40);
        assert_eq!(
            format!("{}", err),
            "Field 'cycle_length' must be between 21 and 35, got 40"
        );
    }

    #[test]
    fn validation_error_too_long_displays_correctly() {
        let err = ValidationError::too_long("notes", 500, 501);
        assert_eq!(
            format!("{}", err),
            "Field 'notes' must be at most 500 characters, got 501"
        );
    }

    #[test]
    fn check_range_is_inclusive() {
        assert!(ValidationError::check_range("energy_level", 1, 1, 5).is_ok());
        assert!(ValidationError::check_range("energy_level", 5, 1, 5).is_ok());
        assert!(ValidationError::check_range("energy_level", 0, 1, 5).is_err());
        assert!(ValidationError::check_range("energy_level", 6, 1, 5).is_err());
    }

    #[test]
    fn check_length_counts_characters_not_bytes() {
        let text = "é".repeat(500);
        assert!(ValidationError::check_length("notes", Some(&text), 500).is_ok());
        assert!(ValidationError::check_length("notes", None, 500).is_ok());
        assert!(ValidationError::check_length("notes", Some(&"x".repeat(501)), 500).is_err());
    }

    #[test]
    fn check_date_rejects_years_outside_supported_window() {
        let ok = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let far = NaiveDate::from_ymd_opt(262_142, 12, 1).unwrap();
        let ancient = NaiveDate::from_ymd_opt(1899, 12, 31).unwrap();

        assert!(ValidationError::check_date("start_date", ok).is_ok());
        assert_eq!(
            ValidationError::check_date("start_date", far).unwrap_err().field(),
            "start_date"
        );
        assert!(ValidationError::check_date("log_date", ancient).is_err());
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::PartnerNotFound, "Partner not found");
        assert_eq!(format!("{}", err), "[PARTNER_NOT_FOUND] Partner not found");
    }

    #[test]
    fn validation_error_converts_with_field_detail() {
        let err: DomainError = ValidationError::empty_field("name").into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"name".to_string()));
    }

    #[test]
    fn database_error_prefixes_operation() {
        let err = DomainError::database("insert partner", "connection reset");
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Failed to insert partner: connection reset");
    }
}
