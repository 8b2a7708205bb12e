//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `PartnerRepository` - Partner profiles, one per user, including the
//!   transactional forecast refresh after a cycle settings change
//! - `PeriodLogRepository` - Actual and predicted periods, including the
//!   transactional recording of a new period
//! - `DailyLogRepository` - Daily check-ins
//!
//! ## Auth Ports
//!
//! - `SessionValidator` - Bearer token validation

mod daily_log_repository;
mod list_options;
mod partner_repository;
mod period_log_repository;
mod session_validator;

pub use daily_log_repository::DailyLogRepository;
pub use list_options::{ListOptions, MAX_PAGE_LIMIT};
pub use partner_repository::{ForecastRefresh, PartnerRepository};
pub use period_log_repository::{PeriodLogRepository, PeriodRecording, RecordingOutcome};
pub use session_validator::SessionValidator;
