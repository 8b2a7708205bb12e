//! HTTP routes for cycle endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    get_calendar_month, get_current_status, get_cycle_patterns, get_phase_table, CycleHandlers,
};

/// Routes mounted at `/api/partners/me/cycle`.
pub fn cycle_routes(handlers: CycleHandlers) -> Router {
    Router::new()
        .route("/current", get(get_current_status))
        .route("/phases", get(get_phase_table))
        .route("/calendar", get(get_calendar_month))
        .route("/patterns", get(get_cycle_patterns))
        .with_state(handlers)
}
