use axum::extract::State;
use axum::{routing::get, Router};
use serde::Serialize;

use crate::response::PrettyJson;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of dogs currently in the store.
    pub dog_count: usize,
}

/// GET /health -- returns service health and store size.
async fn health_check(State(state): State<AppState>) -> PrettyJson<HealthResponse> {
    let dog_count = kennel_db::health_check(&state.store).await;

    PrettyJson(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        dog_count,
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
