//! Top-level API router: module routers plus middleware.

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::cycle::cycle_routes;
use super::daily_log::daily_log_routes;
use super::middleware::{auth_middleware, AuthState};
use super::partner::partner_routes;
use super::period_log::period_log_routes;
use super::state::ApiHandlers;

/// Cross-cutting HTTP settings.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Builds the full application router.
///
/// Every request passes the auth middleware; handlers that need a user
/// reject anonymous requests through `RequireAuth`.
pub fn build_router(handlers: ApiHandlers, auth: AuthState, settings: &RouterSettings) -> Router {
    let api = Router::new()
        .nest("/api/partners/me", partner_routes(handlers.partners))
        .nest("/api/partners/me/periods", period_log_routes(handlers.period_logs))
        .nest("/api/partners/me/daily-logs", daily_log_routes(handlers.daily_logs))
        .nest("/api/partners/me/cycle", cycle_routes(handlers.cycle));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(middleware::from_fn_with_state(auth, auth_middleware))
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.cors_origins))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// CORS for the configured origins. `*` allows any origin; unparseable
/// entries are skipped.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|origin| origin == "*") {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
