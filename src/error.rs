//! API error type mapped onto `{"detail": ...}` JSON responses.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Errors surfaced to API callers.
///
/// Internal failures are logged server-side and masked behind a generic
/// message; the other variants carry their public detail string.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        ApiError::Unauthorized(detail.into())
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        ApiError::NotFound(detail.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized(detail) => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(ErrorBody { detail }),
            )
                .into_response(),
            ApiError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, Json(ErrorBody { detail })).into_response()
            }
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        detail: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
