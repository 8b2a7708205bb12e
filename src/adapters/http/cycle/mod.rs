//! HTTP adapter for the cycle engine's read-only views.

mod dto;
mod handlers;
mod routes;

pub use dto::CalendarParams;
pub use handlers::CycleHandlers;
pub use routes::cycle_routes;
