//! Derived agrometeorological metrics
//!
//! Deviation from the climatological normal and the fixed threshold tables
//! used to colour bulletin banners.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AgrometError, AgrometResult};
use crate::models::{RainClass, SatisfactionBand, SoilReserveStatus};

/// Lower bound of the "Excellent" satisfaction band
pub const SATISFACTION_EXCELLENT_PCT: Decimal = Decimal::from_parts(80, 0, 0, false, 0);
/// Lower bound of the "Correct" satisfaction band
pub const SATISFACTION_CORRECT_PCT: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Soil reserve below which crops are under water stress
pub const SOIL_CRITICAL_PCT: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
/// Soil reserve at which crops are comfortably supplied
pub const SOIL_OPTIMAL_PCT: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Deviation of observed rainfall from the 30-year average
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RainfallDeviation {
    pub deviation_mm: Decimal,
    /// Rounded to one decimal place
    pub deviation_pct: Decimal,
}

/// Compare observed rainfall against its 30-year average
///
/// Fails with `DivisionByZero` when the average is zero, since the
/// percentage is undefined there, and with `InvalidArgument` when the
/// result does not fit in a `Decimal`.
pub fn rainfall_deviation(observed_mm: Decimal, average_mm: Decimal) -> AgrometResult<RainfallDeviation> {
    if average_mm.is_zero() {
        return Err(AgrometError::DivisionByZero(
            "rainfall deviation against a zero 30-year average".to_string(),
        ));
    }

    let overflow = || {
        AgrometError::InvalidArgument(format!(
            "rainfall deviation of {} mm against {} mm is out of range",
            observed_mm, average_mm
        ))
    };
    let deviation_mm = observed_mm.checked_sub(average_mm).ok_or_else(overflow)?;
    let deviation_pct = deviation_mm
        .checked_div(average_mm)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(overflow)?
        .round_dp(1);
    Ok(RainfallDeviation {
        deviation_mm,
        deviation_pct,
    })
}

/// Band of a crop water satisfaction percentage
pub fn classify_satisfaction(percentage: Decimal) -> SatisfactionBand {
    if percentage >= SATISFACTION_EXCELLENT_PCT {
        SatisfactionBand::Excellent
    } else if percentage >= SATISFACTION_CORRECT_PCT {
        SatisfactionBand::Correct
    } else {
        SatisfactionBand::Insufficient
    }
}

/// Intensity class of a daily rain amount
pub fn classify_rain_outlook(rain_mm: Decimal) -> RainClass {
    if rain_mm > Decimal::TEN {
        RainClass::Significant
    } else if rain_mm > Decimal::from(5) {
        RainClass::Moderate
    } else if rain_mm > Decimal::ZERO {
        RainClass::Light
    } else {
        RainClass::None
    }
}

pub fn classify_soil_reserve(reserve_pct: Decimal) -> SoilReserveStatus {
    if reserve_pct < SOIL_CRITICAL_PCT {
        SoilReserveStatus::Critical
    } else if reserve_pct >= SOIL_OPTIMAL_PCT {
        SoilReserveStatus::Optimal
    } else {
        SoilReserveStatus::Adequate
    }
}

/// Change between the last two values of a series
pub fn daily_delta(series: &[Decimal]) -> Option<Decimal> {
    match series {
        [.., previous, latest] => Some(*latest - *previous),
        _ => None,
    }
}
