//! Crop water satisfaction models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::AlertLevel;

/// Water satisfaction of a crop at one development stage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SatisfactionLevel {
    pub stage_label: String,
    /// Crop coefficient range of the stage, e.g. `"Kc=0.8"`
    pub kc_label: String,
    /// 0 to 100
    pub percentage: Decimal,
    pub band: SatisfactionBand,
}

/// Qualitative band of a satisfaction percentage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SatisfactionBand {
    /// 80% and above
    Excellent,
    /// 60% to below 80%
    Correct,
    /// below 60%
    Insufficient,
}

impl SatisfactionBand {
    /// French label shown in bulletins
    pub fn label_fr(&self) -> &'static str {
        match self {
            SatisfactionBand::Excellent => "Excellent",
            SatisfactionBand::Correct => "Correct",
            SatisfactionBand::Insufficient => "Insuffisant",
        }
    }

    pub fn alert_level(&self) -> AlertLevel {
        match self {
            SatisfactionBand::Excellent => AlertLevel::Success,
            SatisfactionBand::Correct => AlertLevel::Warning,
            SatisfactionBand::Insufficient => AlertLevel::Error,
        }
    }
}

impl std::fmt::Display for SatisfactionBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SatisfactionBand::Excellent => write!(f, "Excellent"),
            SatisfactionBand::Correct => write!(f, "Correct"),
            SatisfactionBand::Insufficient => write!(f, "Insufficient"),
        }
    }
}
