//! HTTP handlers for derived metrics

use axum::{extract::Query, Json};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{
    classify_satisfaction, rainfall_deviation, validate_percentage, validate_rainfall_mm,
    RainfallDeviation, SatisfactionBand,
};

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct SatisfactionQuery {
    pub percentage: Decimal,
}

#[derive(Debug, Serialize)]
pub struct SatisfactionResponse {
    pub percentage: Decimal,
    pub band: SatisfactionBand,
    pub label_fr: String,
}

/// Classify a crop water satisfaction percentage
pub async fn get_satisfaction_band(
    Query(query): Query<SatisfactionQuery>,
) -> AppResult<Json<SatisfactionResponse>> {
    validate_percentage(query.percentage)
        .map_err(|msg| AppError::validation("percentage", msg))?;

    let band = classify_satisfaction(query.percentage);
    Ok(Json(SatisfactionResponse {
        percentage: query.percentage,
        band,
        label_fr: band.label_fr().to_string(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct RainfallDeviationQuery {
    pub observed: Decimal,
    pub average: Decimal,
}

/// Deviation of observed rainfall from its 30-year average
pub async fn get_rainfall_deviation(
    Query(query): Query<RainfallDeviationQuery>,
) -> AppResult<Json<RainfallDeviation>> {
    validate_rainfall_mm(query.observed).map_err(|msg| AppError::validation("observed", msg))?;
    validate_rainfall_mm(query.average).map_err(|msg| AppError::validation("average", msg))?;

    Ok(Json(rainfall_deviation(query.observed, query.average)?))
}
