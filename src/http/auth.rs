//! Authentication route handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{middleware, Extension, Json, Router};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::ApiError;
use crate::identity::require_identity;
use crate::types::Identity;

pub(super) fn router(state: Arc<AppState>) -> Router {
    let me = Router::new()
        .route("/me", get(current_identity))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_identity,
        ));

    Router::new()
        .route("/token", post(login))
        .merge(me)
        .with_state(state)
}

// -- /token --

#[derive(Deserialize)]
struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Serialize)]
struct TokenResponse {
    access_token: String,
    token_type: String,
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let access_token = state.gate.login(&request.username, &request.password)?;
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

// -- /me --

async fn current_identity(Extension(identity): Extension<Identity>) -> Json<Identity> {
    Json(identity)
}
