//! User profile and preference route handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{middleware, Extension, Json, Router};

use super::AppState;
use crate::identity::require_identity;
use crate::types::{Identity, Profile, ProfileUpdate, ScalarMap};

pub(super) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/preferences", get(get_preferences).put(update_preferences))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_identity,
        ))
        .with_state(state)
}

// -- /profile --

async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> Json<Profile> {
    Json(state.profiles.get_profile(&identity))
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Json(update): Json<ProfileUpdate>,
) -> Json<Profile> {
    Json(state.profiles.update_profile(&identity, update))
}

// -- /preferences --

async fn get_preferences(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> Json<ScalarMap> {
    Json(state.profiles.preferences(&identity))
}

async fn update_preferences(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Json(preferences): Json<ScalarMap>,
) -> Json<ScalarMap> {
    Json(state.profiles.merge_preferences(&identity, preferences))
}
