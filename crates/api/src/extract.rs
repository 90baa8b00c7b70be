//! Request body extraction.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::AppError;

/// JSON request body.
///
/// Unlike [`axum::Json`] this does not insist on a `content-type` header,
/// and every failure to read or parse the body becomes a 400 with a
/// `{ "message": ... }` body instead of axum's plain-text rejection.
///
/// The body must be a JSON object. Arrays are refused even though serde's
/// derived struct impls would accept them positionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let object: Map<String, Value> = serde_json::from_slice(&bytes).map_err(malformed)?;
        serde_json::from_value(Value::Object(object))
            .map(JsonBody)
            .map_err(malformed)
    }
}

fn malformed(err: serde_json::Error) -> AppError {
    tracing::debug!(error = %err, "Rejected malformed request body");
    AppError::BadRequest(format!("Invalid request body: {err}"))
}
