//! HTTP server for the Studi API.
//!
//! Wires the four route groups (auth, users, docs, agents) behind a single
//! router and serves them with shared application state.

mod agents;
mod auth;
mod docs;
mod handlers;
mod users;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::catalog::DocCatalog;
use crate::config::Config;
use crate::identity::IdentityGate;
use crate::profile::ProfileStore;

/// Shared application state for HTTP handlers
pub struct AppState {
    pub config: Config,
    pub gate: IdentityGate,
    pub profiles: ProfileStore,
    pub catalog: DocCatalog,
}

impl AppState {
    /// State with the stock seed data, as served in production.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            gate: IdentityGate::new(),
            profiles: ProfileStore::seeded(),
            catalog: DocCatalog::new(),
        }
    }
}

/// Build the full application router over the given state
pub fn router(state: Arc<AppState>) -> axum::Router {
    handlers::router(state)
}

/// Run the HTTP server on the given address
pub async fn run_server(config: Config, addr: SocketAddr) -> Result<()> {
    let state = Arc::new(AppState::new(config));
    let app = handlers::router(state);

    tracing::info!("Studi API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .await
        .context("HTTP server error")?;

    Ok(())
}
