#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use http_body_util::BodyExt;
use maitred_auth::AuthOptions;
use maitred_server::{app::build_router, bootstrap, AppState};
use maitred_store::MemoryStore;
use serde_json::{json, Value};
use tower::ServiceExt;

pub const SUPER_EMAIL: &str = "root@maitred.test";
pub const SUPER_PASSWORD: &str = "super-secret";

pub async fn test_app() -> (AppState, Router) {
    let options = AuthOptions {
        secret: "test-secret".to_string(),
        bcrypt_cost: 4,
        ..AuthOptions::default()
    };
    let state = AppState::new(Arc::new(MemoryStore::new()), options);
    bootstrap::seed_super_admin(&state, SUPER_EMAIL, SUPER_PASSWORD)
        .await
        .unwrap();
    let router = build_router(state.clone());
    (state, router)
}

pub async fn request(
    router: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (u16, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let res = router.clone().oneshot(req).await.unwrap();
    let status = res.status().as_u16();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn sign_in(router: &Router, email: &str, password: &str) -> String {
    let (status, body) = request(
        router,
        "POST",
        "/api/auth/sign-in",
        None,
        Some(json!({"email": email, "password": password})),
    )
    .await;
    assert_eq!(status, 200, "sign-in failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

/// Provision a hotel (optionally with a first admin) as the platform
/// account; returns the 201 body.
pub async fn create_hotel(
    router: &Router,
    super_token: &str,
    name: &str,
    admin_email: Option<&str>,
) -> Value {
    let mut body = json!({"name": name});
    if let Some(email) = admin_email {
        body["adminName"] = json!("First Admin");
        body["adminEmail"] = json!(email);
        body["adminPassword"] = json!("secret1");
    }
    let (status, body) = request(router, "POST", "/api/hotels", Some(super_token), Some(body)).await;
    assert_eq!(status, 201, "hotel provisioning failed: {body}");
    body
}
