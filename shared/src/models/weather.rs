//! Daily weather models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day of observations at a station
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyWeatherRecord {
    pub date: NaiveDate,
    pub station: String,
    pub temp_min: Decimal,
    pub temp_max: Decimal,
    pub humidity_min: Decimal,
    pub humidity_max: Decimal,
    pub precipitation_mm: Decimal,
    /// Metres per second
    pub wind_speed: Decimal,
    pub wind_direction: WindDirection,
    pub insolation_hours: Decimal,
}

/// Eight-point compass direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WindDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl WindDirection {
    pub const ALL: [WindDirection; 8] = [
        WindDirection::N,
        WindDirection::NE,
        WindDirection::E,
        WindDirection::SE,
        WindDirection::S,
        WindDirection::SW,
        WindDirection::W,
        WindDirection::NW,
    ];
}

impl std::fmt::Display for WindDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            WindDirection::N => "N",
            WindDirection::NE => "NE",
            WindDirection::E => "E",
            WindDirection::SE => "SE",
            WindDirection::S => "S",
            WindDirection::SW => "SW",
            WindDirection::W => "W",
            WindDirection::NW => "NW",
        };
        write!(f, "{}", label)
    }
}
