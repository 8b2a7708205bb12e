//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, authentication types and error
//! types that form the vocabulary of the Red Recon domain.

mod auth;
mod command;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use command::CommandMetadata;
pub use errors::{
    DomainError, ErrorCode, ValidationError, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR,
};
pub use ids::{DailyLogId, PartnerId, PeriodLogId, UserId};
pub use timestamp::{today, Timestamp};
