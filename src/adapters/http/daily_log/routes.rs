//! HTTP routes for daily log endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_daily_log, delete_daily_log, get_daily_log, list_daily_log_range, list_daily_logs,
    update_daily_log, DailyLogHandlers,
};

/// Routes mounted at `/api/partners/me/daily-logs`.
pub fn daily_log_routes(handlers: DailyLogHandlers) -> Router {
    Router::new()
        .route("/", get(list_daily_logs).post(create_daily_log))
        .route("/range", get(list_daily_log_range))
        .route(
            "/:date",
            get(get_daily_log)
                .patch(update_daily_log)
                .delete(delete_daily_log),
        )
        .with_state(handlers)
}
