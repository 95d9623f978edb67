//! WebAssembly module for the AGROMET_RCI dashboard
//!
//! Provides client-side access to:
//! - The station catalog
//! - Reproducible synthetic climate series
//! - Satisfaction bands and rainfall deviation
//!
//! Structured values cross the boundary as JSON strings.

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

use shared::{
    classify_satisfaction, rainfall_deviation, validate_day_count, validate_percentage,
    validate_rainfall_mm, AgrometError, AgrometResult, ClimateDataGenerator, StationCatalog,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"AGROMET_RCI module loaded".into());
}

/// Region names in catalog order
#[wasm_bindgen(js_name = listRegions)]
pub fn list_regions() -> js_sys::Array {
    StationCatalog::default()
        .list_regions()
        .into_iter()
        .map(JsValue::from)
        .collect()
}

/// Station names of a region
#[wasm_bindgen(js_name = listStations)]
pub fn list_stations(region: &str) -> Result<js_sys::Array, JsValue> {
    let stations = StationCatalog::default()
        .list_stations(region)
        .map_err(to_js)?;
    Ok(stations.into_iter().map(JsValue::from).collect())
}

/// Daily weather records of a station as a JSON array, oldest day first
#[wasm_bindgen(js_name = generateDailyWeather)]
pub fn generate_daily_weather(station: &str, days: u32, seed: u64) -> Result<String, JsValue> {
    daily_weather_json(station, days, seed).map_err(to_js)
}

/// Decade rainfall records of a region as a JSON array
#[wasm_bindgen(js_name = generateDecadeRainfall)]
pub fn generate_decade_rainfall(region: &str, seed: u64) -> Result<String, JsValue> {
    decade_rainfall_json(region, seed).map_err(to_js)
}

/// Satisfaction band of a percentage: `excellent`, `correct` or `insufficient`
#[wasm_bindgen(js_name = classifySatisfaction)]
pub fn classify_satisfaction_pct(percentage: f64) -> Result<String, JsValue> {
    satisfaction_band(percentage).map_err(to_js)
}

/// `{deviation_mm, deviation_pct}` as JSON; errors when the average is zero
#[wasm_bindgen(js_name = rainfallDeviation)]
pub fn rainfall_deviation_mm(observed: f64, average: f64) -> Result<String, JsValue> {
    rainfall_deviation_json(observed, average).map_err(to_js)
}

fn generator(seed: u64) -> ClimateDataGenerator {
    ClimateDataGenerator::new(StationCatalog::default(), seed)
}

fn daily_weather_json(station: &str, days: u32, seed: u64) -> AgrometResult<String> {
    validate_day_count(days).map_err(|msg| AgrometError::InvalidArgument(msg.to_string()))?;
    let records = generator(seed).generate_daily_weather(station, days)?;
    to_json(&records)
}

fn decade_rainfall_json(region: &str, seed: u64) -> AgrometResult<String> {
    let records = generator(seed).generate_decade_rainfall(region)?;
    to_json(&records)
}

fn satisfaction_band(percentage: f64) -> AgrometResult<String> {
    let percentage = decimal(percentage)?;
    validate_percentage(percentage)
        .map_err(|msg| AgrometError::InvalidArgument(msg.to_string()))?;
    to_json(&classify_satisfaction(percentage)).map(|band| band.trim_matches('"').to_string())
}

fn rainfall_deviation_json(observed: f64, average: f64) -> AgrometResult<String> {
    let (observed, average) = (decimal(observed)?, decimal(average)?);
    for value in [observed, average] {
        validate_rainfall_mm(value)
            .map_err(|msg| AgrometError::InvalidArgument(msg.to_string()))?;
    }
    to_json(&rainfall_deviation(observed, average)?)
}

fn decimal(value: f64) -> AgrometResult<Decimal> {
    Decimal::try_from(value)
        .map_err(|e| AgrometError::InvalidArgument(format!("Invalid number {}: {}", value, e)))
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> AgrometResult<String> {
    serde_json::to_string(value)
        .map_err(|e| AgrometError::InvalidArgument(format!("Serialization failed: {}", e)))
}

fn to_js(err: AgrometError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_daily_weather_json() {
        let json = daily_weather_json("Bocanda", 5, 7).unwrap();
        let records: Value = serde_json::from_str(&json).unwrap();
        let records = records.as_array().unwrap();

        assert_eq!(records.len(), 5);
        assert!(records.iter().all(|r| r["station"] == "Bocanda"));
    }

    #[test]
    fn test_same_seed_same_series() {
        assert_eq!(
            decade_rainfall_json("GOH", 3).unwrap(),
            decade_rainfall_json("GOH", 3).unwrap()
        );
    }

    #[test]
    fn test_invalid_requests() {
        assert!(matches!(
            daily_weather_json("Bocanda", 0, 1),
            Err(AgrometError::InvalidArgument(_))
        ));
        assert!(matches!(
            daily_weather_json("Korhogo", 3, 1),
            Err(AgrometError::NotFound(_))
        ));
        assert!(matches!(
            decade_rainfall_json("PORO", 1),
            Err(AgrometError::NotFound(_))
        ));
    }

    #[test]
    fn test_satisfaction_band() {
        assert_eq!(satisfaction_band(80.0).unwrap(), "excellent");
        assert_eq!(satisfaction_band(79.5).unwrap(), "correct");
        assert_eq!(satisfaction_band(60.0).unwrap(), "correct");
        assert_eq!(satisfaction_band(59.5).unwrap(), "insufficient");
        assert!(satisfaction_band(101.0).is_err());
        assert!(satisfaction_band(f64::NAN).is_err());
    }

    #[test]
    fn test_rainfall_deviation_json() {
        let json = rainfall_deviation_json(100.0, 80.0).unwrap();
        let deviation: Value = serde_json::from_str(&json).unwrap();
        let pct: Decimal = deviation["deviation_pct"].as_str().unwrap().parse().unwrap();
        assert_eq!(pct, Decimal::from(25));

        assert!(matches!(
            rainfall_deviation_json(100.0, 0.0),
            Err(AgrometError::DivisionByZero(_))
        ));
        assert!(matches!(
            rainfall_deviation_json(1e27, 0.001),
            Err(AgrometError::InvalidArgument(_))
        ));
    }
}
