//! HTTP error taxonomy and response mapping.
//!
//! # Responsibility
//! - Map core-layer failures onto status codes and JSON error bodies.
//!
//! # Invariants
//! - Request failures never kill the process; each maps to one response.
//! - Store/IO details are logged, never echoed to the caller.

use aspirecrm_core::{AuthError, RepoError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, warn};
use serde_json::json;

/// Request-scoped failure surfaced as an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    /// Lookup or delete addressed an unknown identifier.
    NotFound,
    /// A declared-required form field was absent.
    MissingField(&'static str),
    /// Store-level uniqueness violation.
    Conflict,
    /// Store or infrastructure failure; details are in the logs.
    Internal,
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { entity, id } => {
                warn!("event=http_error module=http status=not_found table={entity} id={id}");
                Self::NotFound
            }
            RepoError::Conflict(message) => {
                warn!("event=http_error module=http status=conflict detail={message}");
                Self::Conflict
            }
            RepoError::Db(err) => {
                error!("event=http_error module=http status=internal error={err}");
                Self::Internal
            }
        }
    }
}

impl From<AuthError> for ApiError {
    // Only the repository arm reaches this conversion; credential
    // failures are answered inline by the login handler.
    fn from(value: AuthError) -> Self {
        match value {
            AuthError::InvalidCredentials => Self::Internal,
            AuthError::Repo(err) => Self::from(err),
        }
    }
}

impl From<crate::session::SessionError> for ApiError {
    fn from(value: crate::session::SessionError) -> Self {
        error!("event=http_error module=http status=internal error={value}");
        Self::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::NotFound => (StatusCode::NOT_FOUND, "not_found", "resource missing".to_string()),
            Self::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                "validation_missing",
                format!("missing required field `{field}`"),
            ),
            Self::Conflict => (
                StatusCode::CONFLICT,
                "conflict",
                "conflicts with an existing row".to_string(),
            ),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
                "internal error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": { "code": code, "message": message }
        }));
        (status, body).into_response()
    }
}
