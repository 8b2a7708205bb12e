//! JSON error body shared by every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;

/// Error body returned by all endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed.to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "field": field })),
        }
    }

    pub fn internal() -> Self {
        Self::new(ErrorCode::InternalError, "Internal server error")
    }
}

/// HTTP status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::PartnerNotFound | ErrorCode::PeriodLogNotFound | ErrorCode::DailyLogNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::PartnerAlreadyExists
        | ErrorCode::PeriodLogAlreadyExists
        | ErrorCode::DailyLogAlreadyExists => StatusCode::CONFLICT,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Builds the response for a module error.
///
/// Infrastructure details are logged and replaced by a generic message.
pub fn error_response(code: ErrorCode, message: String) -> Response {
    let status = status_for(code);
    if status.is_server_error() {
        tracing::error!(code = %code, "{}", message);
        return (status, Json(ErrorResponse::internal())).into_response();
    }
    (status, Json(ErrorResponse::new(code, message))).into_response()
}

/// 400 for a path or query value that does not parse.
pub fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(message))).into_response()
}

/// 400 for a field-level validation failure.
pub fn validation_failed(field: &str, message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::validation(field, message)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_statuses() {
        assert_eq!(status_for(ErrorCode::ValidationFailed), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::PartnerNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::DailyLogAlreadyExists), StatusCode::CONFLICT);
        assert_eq!(
            status_for(ErrorCode::DatabaseError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn server_errors_hide_details() {
        let response = error_response(ErrorCode::DatabaseError, "connection refused".to_string());
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_body_names_field() {
        let body = serde_json::to_value(ErrorResponse::validation("limit", "too big")).unwrap();
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["details"]["field"], "limit");
    }
}
