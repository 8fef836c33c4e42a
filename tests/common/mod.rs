/// Shared fixtures for the HTTP tests
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use bank_api::{
    database::{AccountStore, MemoryDatabase},
    routes::build_router,
    AppState, Config,
};
use serde_json::Value;

pub const TEST_SECRET: &str = "test-secret-key";

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "DBUSER" => Some("bank".to_string()),
        "DBPASS" => Some("bank".to_string()),
        "JWT_SECRET" => Some(TEST_SECRET.to_string()),
        _ => None,
    })
    .unwrap()
}

/// Router backed by an empty in-memory store
pub fn create_test_app() -> (Router, Arc<MemoryDatabase>) {
    let db = Arc::new(MemoryDatabase::new());
    let store: Arc<dyn AccountStore> = db.clone();
    let state = Arc::new(AppState::new(store, &test_config()));
    (build_router(state), db)
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub fn token_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("x-jwt-token", token);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
