//! Decadal rainfall models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Month abbreviations used in period labels, January first
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jun", "Jul", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Number of decades (10-day periods) in a month
pub const DECADES_PER_MONTH: u8 = 3;

/// Rainfall of one decade compared with its references
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecadeRainfallRecord {
    /// 1 to 12
    pub month: u32,
    /// 1 to 3
    pub decade: u8,
    pub period_label: String,
    pub observed_mm: Decimal,
    pub average_30y_mm: Decimal,
    /// `observed_mm - average_30y_mm`
    pub deviation_mm: Decimal,
    pub previous_year_mm: Decimal,
}

impl DecadeRainfallRecord {
    /// Deviation from the 30-year average in percent, `None` when the average is zero
    pub fn deviation_pct(&self) -> Option<Decimal> {
        crate::metrics::rainfall_deviation(self.observed_mm, self.average_30y_mm)
            .ok()
            .map(|d| d.deviation_pct)
    }
}

/// Label of a decade, e.g. `"Fév - Décade 2"`
pub fn period_label(month: u32, decade: u8) -> String {
    let index = month.clamp(1, 12) as usize - 1;
    format!("{} - Décade {}", MONTH_LABELS[index], decade)
}
