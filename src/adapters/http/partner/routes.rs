//! HTTP routes for partner profile endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_partner, delete_partner, get_partner, update_partner, PartnerHandlers,
};

/// Routes mounted at `/api/partners/me`.
pub fn partner_routes(handlers: PartnerHandlers) -> Router {
    Router::new()
        .route(
            "/",
            get(get_partner)
                .post(create_partner)
                .patch(update_partner)
                .delete(delete_partner),
        )
        .with_state(handlers)
}
