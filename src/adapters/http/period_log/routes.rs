//! HTTP routes for period log endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_period_log, delete_period_log, get_period_log, list_period_logs, update_period_log,
    PeriodLogHandlers,
};

/// Routes mounted at `/api/partners/me/periods`.
pub fn period_log_routes(handlers: PeriodLogHandlers) -> Router {
    Router::new()
        .route("/", get(list_period_logs).post(create_period_log))
        .route(
            "/:id",
            get(get_period_log)
                .patch(update_period_log)
                .delete(delete_period_log),
        )
        .with_state(handlers)
}
