#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use kennel_api::config::ServerConfig;
use kennel_api::router::build_app_router;
use kennel_api::state::AppState;
use kennel_db::DogStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Allows `http://localhost:5173` as a CORS origin so preflight behaviour
/// can be exercised.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        ..ServerConfig::default()
    }
}

/// Build the full application router over the given store.
///
/// Uses the same middleware stack as the binary.
pub fn build_test_app(store: DogStore) -> Router {
    let config = test_config();
    build_app_router(AppState { store }, &config)
}

/// Router over the four seed dogs.
pub fn seeded_app() -> (Router, DogStore) {
    let store = DogStore::seeded();
    (build_test_app(store.clone()), store)
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_raw(app, Method::POST, uri, body.to_string()).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_raw(app, Method::PATCH, uri, body.to_string()).await
}

/// Send an arbitrary body with a JSON content type.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    body: impl Into<Body>,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
