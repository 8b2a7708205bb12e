//! HTTP handlers for partner profile endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, validation_failed};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::partner::{
    CreatePartnerCommand, CreatePartnerHandler, DeletePartnerCommand, DeletePartnerHandler,
    GetPartnerHandler, GetPartnerQuery, UpdatePartnerCommand, UpdatePartnerHandler,
};
use crate::domain::foundation::CommandMetadata;
use crate::domain::partner::PartnerError;

use super::dto::{CreatePartnerRequest, PartnerResponse, UpdatePartnerRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PartnerHandlers {
    create_handler: Arc<CreatePartnerHandler>,
    get_handler: Arc<GetPartnerHandler>,
    update_handler: Arc<UpdatePartnerHandler>,
    delete_handler: Arc<DeletePartnerHandler>,
}

impl PartnerHandlers {
    pub fn new(
        create_handler: Arc<CreatePartnerHandler>,
        get_handler: Arc<GetPartnerHandler>,
        update_handler: Arc<UpdatePartnerHandler>,
        delete_handler: Arc<DeletePartnerHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            update_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/partners/me - Create the partner profile
pub async fn create_partner(
    State(handlers): State<PartnerHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreatePartnerRequest>,
) -> Response {
    let cmd = CreatePartnerCommand {
        user_id: user.id.clone(),
        name: req.name,
        settings: req.settings.into_update(None),
    };

    match handlers
        .create_handler
        .handle(cmd, CommandMetadata::new(user.id))
        .await
    {
        Ok(partner) => (StatusCode::CREATED, Json(PartnerResponse::from(&partner))).into_response(),
        Err(e) => handle_partner_error(e),
    }
}

/// GET /api/partners/me - Get the partner profile
pub async fn get_partner(
    State(handlers): State<PartnerHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .get_handler
        .handle(GetPartnerQuery { user_id: user.id })
        .await
    {
        Ok(partner) => (StatusCode::OK, Json(PartnerResponse::from(&partner))).into_response(),
        Err(e) => handle_partner_error(e),
    }
}

/// PATCH /api/partners/me - Partially update the partner profile
pub async fn update_partner(
    State(handlers): State<PartnerHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<UpdatePartnerRequest>,
) -> Response {
    let cmd = UpdatePartnerCommand {
        user_id: user.id.clone(),
        update: req.settings.into_update(req.name),
    };

    match handlers
        .update_handler
        .handle(cmd, CommandMetadata::new(user.id))
        .await
    {
        Ok(partner) => (StatusCode::OK, Json(PartnerResponse::from(&partner))).into_response(),
        Err(e) => handle_partner_error(e),
    }
}

/// DELETE /api/partners/me - Delete the profile and all logs
pub async fn delete_partner(
    State(handlers): State<PartnerHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let cmd = DeletePartnerCommand {
        user_id: user.id.clone(),
    };

    match handlers
        .delete_handler
        .handle(cmd, CommandMetadata::new(user.id))
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_partner_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_partner_error(error: PartnerError) -> Response {
    match &error {
        PartnerError::ValidationFailed { field, .. } => validation_failed(field, error.message()),
        _ => error_response(error.code(), error.message()),
    }
}
