//! HTTP handlers for generated climate series

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{DailyWeatherRecord, RainfallRow};

use crate::error::AppResult;
use crate::services::DashboardService;
use crate::AppState;

/// Query parameters for daily weather
#[derive(Debug, Deserialize)]
pub struct DailyWeatherQuery {
    pub days: Option<u32>,
}

/// Daily weather of a station, oldest day first
pub async fn get_daily_weather(
    State(state): State<AppState>,
    Path(station): Path<String>,
    Query(query): Query<DailyWeatherQuery>,
) -> AppResult<Json<Vec<DailyWeatherRecord>>> {
    let service = DashboardService::new(state.generator, state.config.generator.default_days);
    Ok(Json(service.daily_weather(&station, query.days)?))
}

/// Decade rainfall of a region for the year, in calendar order
pub async fn get_decade_rainfall(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> AppResult<Json<Vec<RainfallRow>>> {
    let service = DashboardService::new(state.generator, state.config.generator.default_days);
    Ok(Json(service.decade_rainfall(&region)?))
}
