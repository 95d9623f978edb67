//! Soil water reserve and short-range rain outlook models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::AlertLevel;

/// Soil water reserve on one day, as a percentage of field capacity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilWaterPoint {
    pub date: NaiveDate,
    pub reserve_pct: Decimal,
}

/// Position of a reserve value against the agronomic thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilReserveStatus {
    /// Below the critical threshold
    Critical,
    Adequate,
    /// At or above the optimal threshold
    Optimal,
}

/// Rain expected on one day of the coming week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RainOutlook {
    pub day_label: String,
    pub rain_mm: Decimal,
    pub class: RainClass,
}

/// Intensity class of a daily rain amount
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RainClass {
    /// More than 10 mm
    Significant,
    /// More than 5 mm
    Moderate,
    /// More than 0 mm
    Light,
    None,
}

impl RainClass {
    pub fn label_fr(&self) -> &'static str {
        match self {
            RainClass::Significant => "Pluie significative",
            RainClass::Moderate => "Pluie modérée",
            RainClass::Light => "Pluie faible",
            RainClass::None => "Pas de pluie",
        }
    }

    pub fn alert_level(&self) -> AlertLevel {
        match self {
            RainClass::Significant => AlertLevel::Success,
            RainClass::Moderate => AlertLevel::Info,
            RainClass::Light => AlertLevel::Warning,
            RainClass::None => AlertLevel::Error,
        }
    }
}
