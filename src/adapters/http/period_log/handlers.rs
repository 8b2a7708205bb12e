//! HTTP handlers for period log endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{bad_request, error_response, validation_failed};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::period_log::{
    CreatePeriodLogCommand, CreatePeriodLogHandler, DeletePeriodLogCommand, DeletePeriodLogHandler,
    GetPeriodLogHandler, GetPeriodLogQuery, ListPeriodLogsHandler, ListPeriodLogsQuery,
    UpdatePeriodLogCommand, UpdatePeriodLogHandler,
};
use crate::domain::foundation::{CommandMetadata, PeriodLogId};
use crate::domain::period_log::PeriodLogError;
use crate::ports::ListOptions;

use super::dto::{
    CreatePeriodLogRequest, ListPeriodLogsParams, PeriodLogResponse, UpdatePeriodLogRequest,
    DEFAULT_PAGE_LIMIT,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PeriodLogHandlers {
    create_handler: Arc<CreatePeriodLogHandler>,
    list_handler: Arc<ListPeriodLogsHandler>,
    get_handler: Arc<GetPeriodLogHandler>,
    update_handler: Arc<UpdatePeriodLogHandler>,
    delete_handler: Arc<DeletePeriodLogHandler>,
}

impl PeriodLogHandlers {
    pub fn new(
        create_handler: Arc<CreatePeriodLogHandler>,
        list_handler: Arc<ListPeriodLogsHandler>,
        get_handler: Arc<GetPeriodLogHandler>,
        update_handler: Arc<UpdatePeriodLogHandler>,
        delete_handler: Arc<DeletePeriodLogHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            get_handler,
            update_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/partners/me/periods - Log a period
pub async fn create_period_log(
    State(handlers): State<PeriodLogHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreatePeriodLogRequest>,
) -> Response {
    let cmd = CreatePeriodLogCommand {
        user_id: user.id.clone(),
        start_date: req.start_date,
        end_date: req.end_date,
        flow_intensity: req.flow_intensity,
        notes: req.notes,
    };

    match handlers
        .create_handler
        .handle(cmd, CommandMetadata::new(user.id))
        .await
    {
        Ok(log) => (StatusCode::CREATED, Json(PeriodLogResponse::from(&log))).into_response(),
        Err(e) => handle_period_log_error(e),
    }
}

/// GET /api/partners/me/periods - List period logs, newest first
pub async fn list_period_logs(
    State(handlers): State<PeriodLogHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ListPeriodLogsParams>,
) -> Response {
    let options = match ListOptions::new(params.skip, params.limit.unwrap_or(DEFAULT_PAGE_LIMIT)) {
        Ok(options) => options,
        Err(e) => return validation_failed(e.field(), e.to_string()),
    };

    let query = ListPeriodLogsQuery {
        user_id: user.id,
        options,
    };

    match handlers.list_handler.handle(query).await {
        Ok(logs) => {
            let body: Vec<PeriodLogResponse> = logs.iter().map(PeriodLogResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_period_log_error(e),
    }
}

/// GET /api/partners/me/periods/:id - Get one period log
pub async fn get_period_log(
    State(handlers): State<PeriodLogHandlers>,
    RequireAuth(user): RequireAuth,
    Path(log_id): Path<String>,
) -> Response {
    let Ok(log_id) = log_id.parse::<PeriodLogId>() else {
        return bad_request("Invalid period log ID");
    };

    let query = GetPeriodLogQuery {
        user_id: user.id,
        log_id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(log) => (StatusCode::OK, Json(PeriodLogResponse::from(&log))).into_response(),
        Err(e) => handle_period_log_error(e),
    }
}

/// PATCH /api/partners/me/periods/:id - Update end date, flow or notes
pub async fn update_period_log(
    State(handlers): State<PeriodLogHandlers>,
    RequireAuth(user): RequireAuth,
    Path(log_id): Path<String>,
    Json(req): Json<UpdatePeriodLogRequest>,
) -> Response {
    let Ok(log_id) = log_id.parse::<PeriodLogId>() else {
        return bad_request("Invalid period log ID");
    };

    let cmd = UpdatePeriodLogCommand {
        user_id: user.id.clone(),
        log_id,
        update: req.into(),
    };

    match handlers
        .update_handler
        .handle(cmd, CommandMetadata::new(user.id))
        .await
    {
        Ok(log) => (StatusCode::OK, Json(PeriodLogResponse::from(&log))).into_response(),
        Err(e) => handle_period_log_error(e),
    }
}

/// DELETE /api/partners/me/periods/:id - Delete a period log
pub async fn delete_period_log(
    State(handlers): State<PeriodLogHandlers>,
    RequireAuth(user): RequireAuth,
    Path(log_id): Path<String>,
) -> Response {
    let Ok(log_id) = log_id.parse::<PeriodLogId>() else {
        return bad_request("Invalid period log ID");
    };

    let cmd = DeletePeriodLogCommand {
        user_id: user.id.clone(),
        log_id,
    };

    match handlers
        .delete_handler
        .handle(cmd, CommandMetadata::new(user.id))
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_period_log_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_period_log_error(error: PeriodLogError) -> Response {
    match &error {
        PeriodLogError::ValidationFailed { field, .. } => validation_failed(field, error.message()),
        _ => error_response(error.code(), error.message()),
    }
}
