//! HTTP handlers for cycle endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, validation_failed};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::cycle::{
    GetCalendarMonthHandler, GetCalendarMonthQuery, GetCurrentStatusHandler,
    GetCurrentStatusQuery, GetCyclePatternsHandler, GetCyclePatternsQuery, GetPhaseTableHandler,
    GetPhaseTableQuery,
};
use crate::domain::cycle::CycleError;
use crate::domain::foundation::today;

use super::dto::CalendarParams;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CycleHandlers {
    status_handler: Arc<GetCurrentStatusHandler>,
    phases_handler: Arc<GetPhaseTableHandler>,
    calendar_handler: Arc<GetCalendarMonthHandler>,
    patterns_handler: Arc<GetCyclePatternsHandler>,
}

impl CycleHandlers {
    pub fn new(
        status_handler: Arc<GetCurrentStatusHandler>,
        phases_handler: Arc<GetPhaseTableHandler>,
        calendar_handler: Arc<GetCalendarMonthHandler>,
        patterns_handler: Arc<GetCyclePatternsHandler>,
    ) -> Self {
        Self {
            status_handler,
            phases_handler,
            calendar_handler,
            patterns_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/partners/me/cycle/current - Cycle status as of today (UTC)
pub async fn get_current_status(
    State(handlers): State<CycleHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetCurrentStatusQuery {
        user_id: user.id,
        today: today(),
    };

    match handlers.status_handler.handle(query).await {
        Ok(status) => (StatusCode::OK, Json(status)).into_response(),
        Err(e) => handle_cycle_error(e),
    }
}

/// GET /api/partners/me/cycle/phases - Phase table with one tip per phase
pub async fn get_phase_table(
    State(handlers): State<CycleHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetPhaseTableQuery { user_id: user.id };

    match handlers.phases_handler.handle(query).await {
        Ok(phases) => (StatusCode::OK, Json(phases)).into_response(),
        Err(e) => handle_cycle_error(e),
    }
}

/// GET /api/partners/me/cycle/calendar?year=&month= - One calendar month
pub async fn get_calendar_month(
    State(handlers): State<CycleHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<CalendarParams>,
) -> Response {
    let (year, month) = params.resolve(today());
    let query = GetCalendarMonthQuery {
        user_id: user.id,
        year,
        month,
    };

    match handlers.calendar_handler.handle(query).await {
        Ok(calendar) => (StatusCode::OK, Json(calendar)).into_response(),
        Err(e) => handle_cycle_error(e),
    }
}

/// GET /api/partners/me/cycle/patterns - Averages and per-phase trends
pub async fn get_cycle_patterns(
    State(handlers): State<CycleHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetCyclePatternsQuery { user_id: user.id };

    match handlers.patterns_handler.handle(query).await {
        Ok(patterns) => (StatusCode::OK, Json(patterns)).into_response(),
        Err(e) => handle_cycle_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_cycle_error(error: CycleError) -> Response {
    match &error {
        CycleError::InvalidMonth { .. } => validation_failed("month", error.message()),
        _ => error_response(error.code(), error.message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    #[test]
    fn invalid_month_maps_to_400() {
        let response = handle_cycle_error(CycleError::invalid_month(2025, 13));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_partner_maps_to_404() {
        let user = UserId::new("user-1").unwrap();
        let response = handle_cycle_error(CycleError::partner_not_found(user));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_cycle_error(CycleError::infrastructure("pool timed out"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
