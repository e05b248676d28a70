#![allow(dead_code)]

//! Test infrastructure for dc-server API tests

use dc_auth::{Claims, JwtValidator};
use dc_db::Store;
use dc_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

pub const JWT_SECRET: &str = "integration-test-secret-at-least-32-bytes";

/// AppState in development mode (X-User-Id auth) over an in-memory store
pub async fn create_test_app_state() -> AppState {
    let store = Store::in_memory()
        .await
        .expect("Failed to create test store");
    AppState::new(store, None)
}

/// AppState with HS256 bearer-token auth
pub async fn create_jwt_app_state() -> AppState {
    let store = Store::in_memory()
        .await
        .expect("Failed to create test store");
    let validator = JwtValidator::with_hs256(JWT_SECRET.as_bytes());
    AppState::new(store, Some(Arc::new(validator)))
}

pub fn create_token(user_id: Uuid, name: &str, exp_offset_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        name: Some(name.to_string()),
        email: Some(format!("{}@example.com", user_id.simple())),
        avatar: Some("https://gravatar.test/avatar.png".to_string()),
        exp: now + exp_offset_secs,
        iat: now,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("Failed to encode token")
}

/// Send one request through a fresh router and decode the JSON response
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    user: Option<Uuid>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("X-User-Id", user.to_string());
    }

    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(build_router(state.clone()), request).await
}

pub async fn send_request(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub fn profile_body() -> Value {
    json!({
        "status": "Developer",
        "skills": "rust, sql ,  http",
        "company": "Acme",
        "twitter": "https://twitter.com/acme"
    })
}

/// Create a user and profile through the API; panics on failure
pub async fn create_test_profile(state: &AppState, user: Uuid) -> Value {
    let (status, json) = send(state, "POST", "/api/profile", Some(user), Some(profile_body())).await;
    assert_eq!(status, StatusCode::OK, "profile creation failed: {json}");
    json
}

/// Add an experience entry through the API and return its id
pub async fn add_test_experience(state: &AppState, user: Uuid, title: &str) -> String {
    let (status, json) = send(
        state,
        "PUT",
        "/api/profile/experience",
        Some(user),
        Some(json!({ "title": title, "company": "Acme", "from": "2020-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "experience insert failed: {json}");
    json["experience"][0]["id"].as_str().unwrap().to_string()
}
