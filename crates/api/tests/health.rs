//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_bytes, body_json, get, seeded_app};
use tower::ServiceExt;

#[tokio::test]
async fn health_check_returns_ok_with_dog_count() {
    let (app, _) = seeded_app();
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["dog_count"], 4);
}

#[tokio::test]
async fn health_check_is_indented_json() {
    let (app, _) = seeded_app();
    let response = get(app, "/health").await;

    assert_eq!(
        response.headers()["content-type"],
        "application/json; charset=utf-8"
    );
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.starts_with("{\n    \"status\": \"ok\","), "got: {body}");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (app, _) = seeded_app();
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let (app, _) = seeded_app();
    let response = get(app, "/dogs").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // MakeRequestUuid produces a hyphenated UUID.
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let (app, _) = seeded_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/dogs")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "PATCH")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("PATCH"),
        "Allow-Methods should contain PATCH, got: {allow_methods}"
    );
}

#[tokio::test]
async fn cors_preflight_ignores_unknown_origin() {
    let (app, _) = seeded_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/dogs")
        .header("Origin", "http://evil.test")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}
