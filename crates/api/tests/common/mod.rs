#![allow(dead_code)]

//! Shared helpers for API integration tests.
//!
//! Tests run against the full application router (every middleware layer)
//! via `tower::ServiceExt::oneshot`, without a TCP listener.
//!
//! Store-backed tests need a running MongoDB instance and are gated on the
//! `MONGODB_URI` environment variable; without it they skip with a note on
//! stderr. The no-store tests use a client pointed at a closed port with a
//! short server selection timeout, so failure paths stay fast and
//! deterministic.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tower::ServiceExt;

use fauna_api::config::ServerConfig;
use fauna_api::router::build_app_router;
use fauna_api::state::AppState;

/// Closed port; connection attempts can never reach a server.
const DEAD_MONGO_URI: &str = "mongodb://127.0.0.1:9";

/// A fixed configuration for router construction in tests: the dev CORS
/// origin and a 30-second request timeout. The store settings are inert,
/// since tests construct their database handles directly rather than
/// through the config.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        mongodb_uri: DEAD_MONGO_URI.to_string(),
        mongodb_db: "fauna_test".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Database handle whose server can never be reached.
///
/// Server selection is capped at 200ms so endpoints that touch the store
/// fail fast instead of waiting out the driver's 30-second default.
pub async fn dead_db() -> Database {
    let mut options = ClientOptions::parse(DEAD_MONGO_URI).await.unwrap();
    options.server_selection_timeout = Some(Duration::from_millis(200));
    Client::with_options(options).unwrap().database("fauna_dead")
}

/// Build the full application router backed by an unreachable store.
///
/// This mirrors the router construction in `main.rs` so tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub async fn build_test_app() -> Router {
    build_app_router(AppState { db: dead_db().await }, &test_config())
}

/// Build the app against a live MongoDB, or `None` when `MONGODB_URI` is
/// not set.
///
/// Each caller gets its own database named after the test, dropped up
/// front, so tests never share state and leftovers can be inspected after
/// a failure.
pub async fn try_live_app(test_name: &str) -> Option<Router> {
    let uri = match std::env::var("MONGODB_URI") {
        Ok(uri) => uri,
        Err(_) => {
            eprintln!("skipping {test_name}: MONGODB_URI is not set");
            return None;
        }
    };

    let client = Client::with_uri_str(&uri)
        .await
        .expect("Failed to connect to MongoDB");
    let db = client.database(&format!("fauna_test_{test_name}"));
    db.drop().await.expect("Failed to drop test database");

    Some(build_app_router(AppState { db }, &test_config()))
}

/// Send a GET request and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a request with an arbitrary raw body and content type, for
/// exercising body rejection paths.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    content_type: &str,
    body: &str,
) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read the full response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
