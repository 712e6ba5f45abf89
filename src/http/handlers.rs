//! Route table and the top-level handlers.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Json;
use serde::Serialize;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use super::AppState;
use crate::config::Config;

/// Build the axum router with all route groups
pub(super) fn router(state: Arc<AppState>) -> axum::Router {
    use axum::routing::get;

    let cors = cors_layer(&state.config);

    axum::Router::new()
        .route("/", get(root))
        .route("/api/health", get(health))
        .nest("/api/auth", super::auth::router(state.clone()))
        .nest("/api/users", super::users::router(state.clone()))
        .nest("/api/docs", super::docs::router(state.clone()))
        .nest("/api/agents", super::agents::router(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// CORS for the configured web origins, with credentials.
///
/// Methods and headers mirror the request because a wildcard cannot be
/// combined with credentialed requests.
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

// -- / --

#[derive(Serialize)]
struct RootResponse {
    message: String,
    docs: String,
    redoc: String,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to Studi API".to_string(),
        docs: "/docs".to_string(),
        redoc: "/redoc".to_string(),
    })
}

// -- /api/health --

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
