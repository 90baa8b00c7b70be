//! Indented JSON responses.
//!
//! Every payload this service returns is rendered with four-space
//! indentation.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Like [`axum::Json`], but pretty-printed.
///
/// # Example
///
/// ```ignore
/// Ok((StatusCode::CREATED, PrettyJson(dog)))
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyJson<T>(pub T);

/// Serialize `value` with four-space indentation.
pub fn to_indented_vec<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(128);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match to_indented_vec(&self.0) {
            Ok(body) => (
                [(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
                body,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to serialize response body");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
                    r#"{"message":"An internal error occurred"}"#,
                )
                    .into_response()
            }
        }
    }
}
