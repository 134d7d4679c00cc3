#![allow(dead_code)]

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use rest_api::{build_router, connect_lazy, AppConfig, AppState, Environment};
use std::time::Duration;

/// Router backed by a pool that can never connect, so any database access fails fast.
pub fn offline_app(environment: Environment) -> Router {
    let config = AppConfig {
        database_url: "postgres://rest_api@127.0.0.1:1/rest_api".into(),
        acquire_timeout: Duration::from_millis(500),
        environment,
        ..AppConfig::default()
    };
    let pool = connect_lazy(&config).expect("pool");
    build_router(AppState::new(pool, environment), config.body_limit)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

pub async fn read_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8")
}
