#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::Router;
use serde_json::Value;

use studi_api::catalog::DocCatalog;
use studi_api::config::Config;
use studi_api::http::{router, AppState};
use studi_api::identity::IdentityGate;
use studi_api::profile::ProfileStore;

/// Bearer token for the seeded active user (mock tokens are usernames).
pub const TOKEN: &str = "johndoe";

/// Config with the artificial agent delays disabled so the suite stays fast.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.agent.query_delay_ms = 0;
    config.agent.plan_delay_ms = 0;
    config
}

/// Router over a fresh, empty profile store.
pub fn test_app() -> Router {
    app_with_profiles(ProfileStore::new())
}

/// Router over the stock seeded profile store.
pub fn seeded_app() -> Router {
    app_with_profiles(ProfileStore::seeded())
}

fn app_with_profiles(profiles: ProfileStore) -> Router {
    let state = AppState {
        config: test_config(),
        gate: IdentityGate::new(),
        profiles,
        catalog: DocCatalog::new(),
    };
    router(Arc::new(state))
}

/// Build a JSON request without credentials.
pub fn json_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    match body {
        Some(value) => builder.body(Body::from(value.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Build a JSON request authenticated as the seeded user.
pub fn authed_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {TOKEN}"));
    match body {
        Some(value) => builder.body(Body::from(value.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Read a response body as JSON.
pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()))
}
