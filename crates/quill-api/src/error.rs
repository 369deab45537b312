//! API error type and response formatting.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// API error that converts to an HTTP response with a `{"error": ...}`
/// JSON body. Validation failures keep their human-readable message;
/// internals are logged and masked.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or invalid credentials/token.
    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),

    /// Authenticated, but not allowed to touch this resource.
    #[error("forbidden: {0}")]
    Forbidden(&'static str),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid request payload.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (database, hashing, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.to_string()),
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.to_string()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
