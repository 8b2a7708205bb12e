//! HTTP handlers for daily log endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;

use crate::adapters::http::error::{bad_request, error_response, validation_failed};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::daily_log::{
    CreateDailyLogCommand, CreateDailyLogHandler, DeleteDailyLogCommand, DeleteDailyLogHandler,
    GetDailyLogHandler, GetDailyLogQuery, ListDailyLogRangeHandler, ListDailyLogRangeQuery,
    ListDailyLogsHandler, ListDailyLogsQuery, UpdateDailyLogCommand, UpdateDailyLogHandler,
};
use crate::domain::daily_log::{DailyLog, DailyLogError};
use crate::domain::foundation::CommandMetadata;
use crate::ports::ListOptions;

use super::dto::{
    CreateDailyLogRequest, DailyLogFields, DailyLogRangeParams, DailyLogResponse,
    ListDailyLogsParams, DEFAULT_PAGE_LIMIT,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DailyLogHandlers {
    create_handler: Arc<CreateDailyLogHandler>,
    list_handler: Arc<ListDailyLogsHandler>,
    range_handler: Arc<ListDailyLogRangeHandler>,
    get_handler: Arc<GetDailyLogHandler>,
    update_handler: Arc<UpdateDailyLogHandler>,
    delete_handler: Arc<DeleteDailyLogHandler>,
}

impl DailyLogHandlers {
    pub fn new(
        create_handler: Arc<CreateDailyLogHandler>,
        list_handler: Arc<ListDailyLogsHandler>,
        range_handler: Arc<ListDailyLogRangeHandler>,
        get_handler: Arc<GetDailyLogHandler>,
        update_handler: Arc<UpdateDailyLogHandler>,
        delete_handler: Arc<DeleteDailyLogHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            range_handler,
            get_handler,
            update_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/partners/me/daily-logs - Record a check-in
pub async fn create_daily_log(
    State(handlers): State<DailyLogHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateDailyLogRequest>,
) -> Response {
    let cmd = CreateDailyLogCommand {
        user_id: user.id.clone(),
        log_date: req.log_date,
        fields: req.fields.into(),
    };

    match handlers
        .create_handler
        .handle(cmd, CommandMetadata::new(user.id))
        .await
    {
        Ok(log) => (StatusCode::CREATED, Json(DailyLogResponse::from(&log))).into_response(),
        Err(e) => handle_daily_log_error(e),
    }
}

/// GET /api/partners/me/daily-logs - List check-ins, newest first
pub async fn list_daily_logs(
    State(handlers): State<DailyLogHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ListDailyLogsParams>,
) -> Response {
    let options = match ListOptions::new(params.skip, params.limit.unwrap_or(DEFAULT_PAGE_LIMIT)) {
        Ok(options) => options,
        Err(e) => return validation_failed(e.field(), e.to_string()),
    };

    let query = ListDailyLogsQuery {
        user_id: user.id,
        options,
    };

    match handlers.list_handler.handle(query).await {
        Ok(logs) => list_response(&logs),
        Err(e) => handle_daily_log_error(e),
    }
}

/// GET /api/partners/me/daily-logs/range - Check-ins between two dates, oldest first
pub async fn list_daily_log_range(
    State(handlers): State<DailyLogHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<DailyLogRangeParams>,
) -> Response {
    let query = ListDailyLogRangeQuery {
        user_id: user.id,
        start: params.start_date,
        end: params.end_date,
    };

    match handlers.range_handler.handle(query).await {
        Ok(logs) => list_response(&logs),
        Err(e) => handle_daily_log_error(e),
    }
}

/// GET /api/partners/me/daily-logs/:date - Check-in for one day
pub async fn get_daily_log(
    State(handlers): State<DailyLogHandlers>,
    RequireAuth(user): RequireAuth,
    Path(log_date): Path<String>,
) -> Response {
    let Some(log_date) = parse_date(&log_date) else {
        return bad_request("Invalid date, expected YYYY-MM-DD");
    };

    let query = GetDailyLogQuery {
        user_id: user.id,
        log_date,
    };

    match handlers.get_handler.handle(query).await {
        Ok(log) => (StatusCode::OK, Json(DailyLogResponse::from(&log))).into_response(),
        Err(e) => handle_daily_log_error(e),
    }
}

/// PATCH /api/partners/me/daily-logs/:date - Update a check-in
pub async fn update_daily_log(
    State(handlers): State<DailyLogHandlers>,
    RequireAuth(user): RequireAuth,
    Path(log_date): Path<String>,
    Json(req): Json<DailyLogFields>,
) -> Response {
    let Some(log_date) = parse_date(&log_date) else {
        return bad_request("Invalid date, expected YYYY-MM-DD");
    };

    let cmd = UpdateDailyLogCommand {
        user_id: user.id.clone(),
        log_date,
        update: req.into(),
    };

    match handlers
        .update_handler
        .handle(cmd, CommandMetadata::new(user.id))
        .await
    {
        Ok(log) => (StatusCode::OK, Json(DailyLogResponse::from(&log))).into_response(),
        Err(e) => handle_daily_log_error(e),
    }
}

/// DELETE /api/partners/me/daily-logs/:date - Delete a check-in
pub async fn delete_daily_log(
    State(handlers): State<DailyLogHandlers>,
    RequireAuth(user): RequireAuth,
    Path(log_date): Path<String>,
) -> Response {
    let Some(log_date) = parse_date(&log_date) else {
        return bad_request("Invalid date, expected YYYY-MM-DD");
    };

    let cmd = DeleteDailyLogCommand {
        user_id: user.id.clone(),
        log_date,
    };

    match handlers
        .delete_handler
        .handle(cmd, CommandMetadata::new(user.id))
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_daily_log_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn list_response(logs: &[DailyLog]) -> Response {
    let body: Vec<DailyLogResponse> = logs.iter().map(DailyLogResponse::from).collect();
    (StatusCode::OK, Json(body)).into_response()
}

fn handle_daily_log_error(error: DailyLogError) -> Response {
    match &error {
        DailyLogError::ValidationFailed { field, .. } => validation_failed(field, error.message()),
        DailyLogError::InvalidRange { .. } => validation_failed("start_date", error.message()),
        _ => error_response(error.code(), error.message()),
    }
}
