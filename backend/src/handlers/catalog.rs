//! HTTP handlers for the station catalog

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::services::DashboardService;
use crate::AppState;

/// List region names in catalog order
pub async fn list_regions(State(state): State<AppState>) -> Json<Vec<String>> {
    let service = DashboardService::new(state.generator, state.config.generator.default_days);
    Json(service.list_regions())
}

/// List station names of a region
pub async fn list_stations(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    let service = DashboardService::new(state.generator, state.config.generator.default_days);
    Ok(Json(service.list_stations(&region)?))
}
