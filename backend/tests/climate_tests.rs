//! Catalog, climate series and metrics integration tests

mod common;

use axum::http::StatusCode;
use common::{app, get, login, send_json};
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

fn dec(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn test_catalog_listing() {
    let app = app();
    let token = login(&app).await;

    let (status, regions) = send_json(&app, get("/api/v1/regions", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(regions, serde_json::json!(["N'ZI", "GOH"]));

    let (status, stations) = send_json(&app, get("/api/v1/regions/GOH/stations", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stations, serde_json::json!(["Gagnoa", "Ouragahio", "Oumé"]));

    let (status, body) = send_json(&app, get("/api/v1/regions/BAFING/stations", &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_daily_weather_defaults_to_configured_days() {
    let app = app();
    let token = login(&app).await;

    let (status, body) = send_json(&app, get("/api/v1/stations/Dimbokro/weather", &token)).await;
    assert_eq!(status, StatusCode::OK);

    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 7);
    assert_eq!(records[6]["date"], "2024-06-15");
    assert_eq!(records[0]["date"], "2024-06-09");
    for record in records {
        assert_eq!(record["station"], "Dimbokro");
        assert!(dec(&record["temp_min"]) < dec(&record["temp_max"]));
        assert!(dec(&record["humidity_min"]) < dec(&record["humidity_max"]));
    }
}

#[tokio::test]
async fn test_daily_weather_is_reproducible() {
    let app = app();
    let token = login(&app).await;

    let (_, first) = send_json(&app, get("/api/v1/stations/Oum%C3%A9/weather?days=14", &token)).await;
    let (_, second) = send_json(&app, get("/api/v1/stations/Oum%C3%A9/weather?days=14", &token)).await;
    assert_eq!(first.as_array().unwrap().len(), 14);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_daily_weather_rejects_bad_input() {
    let app = app();
    let token = login(&app).await;

    let (status, body) =
        send_json(&app, get("/api/v1/stations/Dimbokro/weather?days=0", &token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "days");

    let (status, _) =
        send_json(&app, get("/api/v1/stations/Dimbokro/weather?days=400", &token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(&app, get("/api/v1/stations/Abidjan/weather", &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_decade_rainfall_covers_the_year() {
    let app = app();
    let token = login(&app).await;

    let (status, body) = send_json(&app, get("/api/v1/regions/N%27ZI/rainfall", &token)).await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 36);
    assert_eq!(rows[0]["period_label"], "Jan - Décade 1");
    assert_eq!(rows[35]["month"], 12);
    assert_eq!(rows[35]["decade"], 3);
    for row in rows {
        assert_eq!(
            dec(&row["deviation_mm"]),
            dec(&row["observed_mm"]) - dec(&row["average_30y_mm"])
        );
    }
}

#[tokio::test]
async fn test_satisfaction_bands() {
    let app = app();
    let token = login(&app).await;

    let cases = [
        ("80", "excellent"),
        ("79.9", "correct"),
        ("60", "correct"),
        ("59.9", "insufficient"),
    ];
    for (percentage, band) in cases {
        let uri = format!("/api/v1/metrics/satisfaction?percentage={}", percentage);
        let (status, body) = send_json(&app, get(&uri, &token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["band"], band);
    }

    let (status, _) = send_json(
        &app,
        get("/api/v1/metrics/satisfaction?percentage=120", &token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rainfall_deviation() {
    let app = app();
    let token = login(&app).await;

    let (status, body) = send_json(
        &app,
        get("/api/v1/metrics/rainfall-deviation?observed=100&average=80", &token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["deviation_mm"]), Decimal::from(20));
    assert_eq!(dec(&body["deviation_pct"]), Decimal::from(25));

    let (status, body) = send_json(
        &app,
        get("/api/v1/metrics/rainfall-deviation?observed=100&average=0", &token),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "NOT_APPLICABLE");

    let (status, body) = send_json(
        &app,
        get(
            "/api/v1/metrics/rainfall-deviation?observed=1000000000000000000000000000&average=0.001",
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
