//! HTTP adapter for daily log endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateDailyLogRequest, DailyLogFields, DailyLogResponse};
pub use handlers::DailyLogHandlers;
pub use routes::daily_log_routes;
