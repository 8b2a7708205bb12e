//! HTTP adapter for period log endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreatePeriodLogRequest, PeriodLogResponse, UpdatePeriodLogRequest};
pub use handlers::PeriodLogHandlers;
pub use routes::period_log_routes;
