//! Bulletin integration tests
//!
//! Menu dispatch through the session selection and explicit views.

mod common;

use axum::http::{header, StatusCode};
use common::{app, get, login, send, send_json, with_json};
use serde_json::json;

#[tokio::test]
async fn test_current_bulletin_follows_the_menu() {
    let app = app();
    let token = login(&app).await;

    let (status, body) = send_json(&app, get("/api/v1/bulletin", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "daily_weather");
    assert_eq!(body["content"]["view"], "daily_weather");
    assert_eq!(body["station"], "Dimbokro");
    assert_eq!(body["issued_on"], "2024-06-15");
    assert_eq!(body["content"]["records"].as_array().unwrap().len(), 7);
    assert_eq!(body["content"]["cards"].as_array().unwrap().len(), 4);

    send_json(
        &app,
        with_json(
            "PUT",
            "/api/v1/session/selection",
            Some(&token),
            json!({"region": "GOH", "view": "rainfall_situation"}),
        ),
    )
    .await;

    let (status, body) = send_json(&app, get("/api/v1/bulletin", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Situation Pluviométrique - Région GOH");
    assert_eq!(body["content"]["rows"].as_array().unwrap().len(), 36);
    assert!(body.get("station").is_none());
}

#[tokio::test]
async fn test_every_view_renders() {
    let app = app();
    let token = login(&app).await;

    for view in [
        "daily_weather",
        "rainfall_situation",
        "seasonal_forecast",
        "crop_water_satisfaction",
        "soil_water_reserve",
        "advice",
    ] {
        let uri = format!("/api/v1/bulletins/{}", view);
        let (status, body) = send_json(&app, get(&uri, &token)).await;
        assert_eq!(status, StatusCode::OK, "view {}", view);
        assert_eq!(body["kind"], view);
        assert_eq!(body["region"], "N'ZI");
    }
}

#[tokio::test]
async fn test_unknown_view_is_not_found() {
    let app = app();
    let token = login(&app).await;

    let (status, body) = send_json(&app, get("/api/v1/bulletins/pollen", &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_explicit_view_keeps_session_view() {
    let app = app();
    let token = login(&app).await;

    let (status, _) = send_json(&app, get("/api/v1/bulletins/advice", &token)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, session) = send_json(&app, get("/api/v1/session", &token)).await;
    assert_eq!(session["selection"]["view"], "daily_weather");
}

#[tokio::test]
async fn test_crop_satisfaction_bands() {
    let app = app();
    let token = login(&app).await;

    let (_, body) = send_json(
        &app,
        get("/api/v1/bulletins/crop_water_satisfaction", &token),
    )
    .await;
    let bands: Vec<&str> = body["content"]["stages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|stage| stage["band"].as_str().unwrap())
        .collect();
    assert_eq!(bands, ["excellent", "correct", "excellent"]);
}

#[tokio::test]
async fn test_text_format() {
    let app = app();
    let token = login(&app).await;

    let response = {
        use tower::ServiceExt;
        app.clone()
            .oneshot(get("/api/v1/bulletins/advice?format=text", &token))
            .await
            .unwrap()
    };
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));

    let (_, body) = send(&app, get("/api/v1/bulletins/advice?format=text", &token)).await;
    let text = String::from_utf8(body).unwrap();
    assert!(text.starts_with("Avis et Conseils Agrométéorologiques - Région N'ZI"));
    assert!(text.contains("## Calendrier Agricole - Prochaines Semaines"));
}

#[tokio::test]
async fn test_days_parameter_applies_to_daily_view() {
    let app = app();
    let token = login(&app).await;

    let (status, body) = send_json(&app, get("/api/v1/bulletin?days=30", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"]["records"].as_array().unwrap().len(), 30);

    let (status, _) = send_json(&app, get("/api/v1/bulletin?days=0", &token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
