use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kennel_core::error::{CoreError, CONFLICTING_IDS, DOG_NOT_FOUND};
use serde::Serialize;

use crate::response::PrettyJson;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "message": ... }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `kennel_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request body that could not be read or parsed.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { id } => {
                    tracing::debug!(dog_id = %id, "Dog not found");
                    (StatusCode::NOT_FOUND, DOG_NOT_FOUND.to_string())
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
                CoreError::IdMismatch { .. } => {
                    (StatusCode::FORBIDDEN, CONFLICTING_IDS.to_string())
                }
            },
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, PrettyJson(ErrorBody { message })).into_response()
    }
}
