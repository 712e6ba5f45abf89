//! Identity gate: resolves bearer credentials to caller identities.
//!
//! This is a stand-in for a real authentication service: the user table is
//! seeded in memory and a bearer token is valid iff it equals the username of
//! a known, active user. Downstream handlers receive the resolved
//! [`Identity`] through request extensions and treat it as trustworthy.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::http::AppState;
use crate::types::Identity;

const BEARER_PREFIX: &str = "Bearer ";

/// A seeded user: the identity plus its mock password.
#[derive(Debug, Clone)]
struct UserRecord {
    identity: Identity,
    password: String,
}

/// In-memory user table resolving bearer tokens to identities.
#[derive(Debug, Clone)]
pub struct IdentityGate {
    users: HashMap<String, UserRecord>,
}

impl Default for IdentityGate {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityGate {
    /// Create a gate seeded with the stock demo users.
    pub fn new() -> Self {
        let mut users = HashMap::new();
        users.insert(
            "johndoe".to_string(),
            UserRecord {
                identity: Identity {
                    username: "johndoe".into(),
                    email: Some("johndoe@example.com".into()),
                    full_name: Some("John Doe".into()),
                    disabled: false,
                },
                password: "secret".into(),
            },
        );
        users.insert(
            "alice".to_string(),
            UserRecord {
                identity: Identity {
                    username: "alice".into(),
                    email: Some("alice@example.com".into()),
                    full_name: Some("Alice Wonderson".into()),
                    disabled: true,
                },
                password: "secret2".into(),
            },
        );
        Self { users }
    }

    /// Resolve a bearer token to an identity.
    pub fn resolve(&self, token: &str) -> Result<Identity, ApiError> {
        let record = self
            .users
            .get(token)
            .ok_or_else(|| ApiError::unauthorized("Invalid authentication credentials"))?;
        if record.identity.disabled {
            return Err(ApiError::unauthorized("Inactive user"));
        }
        Ok(record.identity.clone())
    }

    /// Verify a username/password pair and return the bearer token for it.
    pub fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let record = self
            .users
            .get(username)
            .filter(|record| record.password == password && !record.identity.disabled)
            .ok_or_else(|| ApiError::unauthorized("Incorrect username or password"))?;
        Ok(record.identity.username.clone())
    }
}

/// Middleware requiring a resolved identity on the request.
///
/// Inserts the [`Identity`] into request extensions for handlers to take via
/// `Extension<Identity>`.
pub async fn require_identity(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = identity_from_headers(&state.gate, request.headers())?;
    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Resolve the identity carried by the `Authorization` header.
pub fn identity_from_headers(
    gate: &IdentityGate,
    headers: &HeaderMap,
) -> Result<Identity, ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    gate.resolve(extract_bearer_token(header)?)
}

fn extract_bearer_token(header: Option<&str>) -> Result<&str, ApiError> {
    let header = header.ok_or_else(|| ApiError::unauthorized("Not authenticated"))?;
    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| ApiError::unauthorized("Not authenticated"))?;
    if token.is_empty() {
        return Err(ApiError::unauthorized("Not authenticated"));
    }
    Ok(token)
}
