//! Documentation catalog route handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use super::AppState;
use crate::error::ApiError;
use crate::types::{DocCategory, DocContent, DocItem};

pub(super) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/categories", get(categories))
        .route("/items", get(items))
        .route("/content/{doc_id}", get(content))
        .route("/search", get(search))
        .with_state(state)
}

// -- /categories --

async fn categories(State(state): State<Arc<AppState>>) -> Json<Vec<DocCategory>> {
    Json(state.catalog.categories().to_vec())
}

// -- /items --

#[derive(Deserialize)]
struct ItemsParams {
    category_id: Option<String>,
}

async fn items(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ItemsParams>,
) -> Json<Vec<DocItem>> {
    Json(state.catalog.items(params.category_id.as_deref()))
}

// -- /content/{doc_id} --

async fn content(
    State(state): State<Arc<AppState>>,
    Path(doc_id): Path<String>,
) -> Result<Json<DocContent>, ApiError> {
    state
        .catalog
        .content(&doc_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Document with ID {doc_id} not found")))
}

// -- /search --

#[derive(Deserialize)]
struct SearchParams {
    query: String,
}

async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<DocItem>> {
    Json(state.catalog.search(&params.query))
}
