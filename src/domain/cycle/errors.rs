//! Cycle query error types.

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// Errors from the cycle read side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleError {
    /// The authenticated user has no partner profile.
    PartnerNotFound(UserId),
    /// Calendar month outside 1-12 or an unrepresentable year.
    InvalidMonth { year: i32, month: u32 },
    /// Infrastructure error.
    Infrastructure(String),
}

impl CycleError {
    pub fn partner_not_found(user_id: UserId) -> Self {
        CycleError::PartnerNotFound(user_id)
    }
    pub fn invalid_month(year: i32, month: u32) -> Self {
        CycleError::InvalidMonth { year, month }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        CycleError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            CycleError::PartnerNotFound(_) => ErrorCode::PartnerNotFound,
            CycleError::InvalidMonth { .. } => ErrorCode::ValidationFailed,
            CycleError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            CycleError::PartnerNotFound(_) => "Partner profile not found".to_string(),
            CycleError::InvalidMonth { year, month } => {
                format!("Invalid calendar month: {}-{}", year, month)
            }
            CycleError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CycleError {}

impl From<DomainError> for CycleError {
    fn from(err: DomainError) -> Self {
        CycleError::Infrastructure(err.to_string())
    }
}
