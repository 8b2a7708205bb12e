//! PostgreSQL adapters.
//!
//! Repository implementations backed by `sqlx::PgPool`. The schema lives in
//! `migrations/` at the crate root.

mod daily_log_repository;
mod partner_repository;
mod period_log_repository;
mod rows;

pub use daily_log_repository::PostgresDailyLogRepository;
pub use partner_repository::PostgresPartnerRepository;
pub use period_log_repository::PostgresPeriodLogRepository;

/// Embedded schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
