use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{
    cache::Caches, router::router, service::auth::token::TokenService, state::AppState,
};


const PAGE_SIZE: u64 = 20;
const KEYWORD_LIMIT: usize = 10;

/// Router over the test database with an in-memory cache.
fn app(db: &DatabaseConnection) -> (Router, TokenService) {
    let tokens = TokenService::new("test-secret", "cardstore");
    let state = AppState::new(
        db.clone(),
        Caches::memory(),
        tokens.clone(),
        PAGE_SIZE,
        KEYWORD_LIMIT,
    );

    (router().with_state(state), tokens)
}

fn bearer(tokens: &TokenService, user_id: i32) -> String {
    format!("Bearer {}", tokens.issue(user_id).unwrap().token)
}

fn get(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, auth: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Sends one request and decodes the JSON body, `Value::Null` when empty.
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
