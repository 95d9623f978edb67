//! Helpers shared by the integration tests

#![allow(dead_code)]

use agromet_backend::{create_app, AppState, Config};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use shared::{ClimateDataGenerator, StationCatalog};
use tower::ServiceExt;

/// Router with a fixed seed and reference date
pub fn app() -> Router {
    app_with_config(Config::default())
}

pub fn app_with_config(config: Config) -> Router {
    let generator = ClimateDataGenerator::new(StationCatalog::default(), 42)
        .with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    create_app(AppState::with_generator(config, generator))
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

pub async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, value)
}

pub fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn with_json(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Log in and return the bearer token
pub async fn login(app: &Router) -> String {
    let (status, body) = send_json(
        app,
        with_json(
            "POST",
            "/api/v1/auth/login",
            None,
            json!({"username": "kouassi", "password": "secret"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}
