//! Synthetic climate data generator
//!
//! Produces placeholder daily weather, decadal rainfall and soil water
//! series. Every call draws from its own `StdRng`, seeded from the
//! generator seed mixed with the call kind and the station or region name,
//! so output depends only on `(seed, reference_date, inputs)` and calls
//! never influence each other.

use chrono::{Days, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::catalog::StationCatalog;
use crate::error::{AgrometError, AgrometResult};
use crate::models::{
    period_label, DailyWeatherRecord, DecadeRainfallRecord, SoilWaterPoint, WindDirection,
    DECADES_PER_MONTH,
};

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_DAYS: u32 = 7;

/// Inclusive value range with one decimal place, stored in tenths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenthsRange {
    low: i64,
    high: i64,
}

impl TenthsRange {
    pub const fn whole(low: i64, high: i64) -> Self {
        Self {
            low: low * 10,
            high: high * 10,
        }
    }

    pub fn min(&self) -> Decimal {
        Decimal::new(self.low, 1)
    }

    pub fn max(&self) -> Decimal {
        Decimal::new(self.high, 1)
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min() && value <= self.max()
    }

    fn sample(&self, rng: &mut StdRng) -> Decimal {
        Decimal::new(rng.random_range(self.low..=self.high), 1)
    }
}

pub const TEMP_MIN_RANGE: TenthsRange = TenthsRange::whole(20, 25);
pub const TEMP_MAX_RANGE: TenthsRange = TenthsRange::whole(28, 35);
pub const HUMIDITY_MIN_RANGE: TenthsRange = TenthsRange::whole(45, 60);
pub const HUMIDITY_MAX_RANGE: TenthsRange = TenthsRange::whole(75, 95);
pub const PRECIPITATION_RANGE: TenthsRange = TenthsRange::whole(0, 25);
pub const WIND_SPEED_RANGE: TenthsRange = TenthsRange::whole(1, 8);
pub const INSOLATION_RANGE: TenthsRange = TenthsRange::whole(4, 12);

pub const DECADE_OBSERVED_RANGE: TenthsRange = TenthsRange::whole(10, 150);
pub const DECADE_AVERAGE_RANGE: TenthsRange = TenthsRange::whole(50, 120);
pub const DECADE_PREVIOUS_YEAR_RANGE: TenthsRange = TenthsRange::whole(20, 140);

pub const SOIL_RESERVE_RANGE: TenthsRange = TenthsRange::whole(40, 100);

/// Month covered by the soil water reserve bulletin
const SOIL_SERIES_YEAR: i32 = 2024;
const SOIL_SERIES_MONTH: u32 = 5;
const SOIL_SERIES_DAYS: u32 = 31;

/// Seeded source of synthetic station and region data
#[derive(Debug, Clone)]
pub struct ClimateDataGenerator {
    catalog: StationCatalog,
    seed: u64,
    reference_date: NaiveDate,
}

impl Default for ClimateDataGenerator {
    fn default() -> Self {
        Self::new(StationCatalog::default(), DEFAULT_SEED)
    }
}

impl ClimateDataGenerator {
    /// Generator whose daily series end today
    pub fn new(catalog: StationCatalog, seed: u64) -> Self {
        Self {
            catalog,
            seed,
            reference_date: Utc::now().date_naive(),
        }
    }

    /// Pin the last day of daily series
    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = reference_date;
        self
    }

    pub fn catalog(&self) -> &StationCatalog {
        &self.catalog
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// `num_days` consecutive days ending on the reference date, oldest first
    pub fn generate_daily_weather(
        &self,
        station_id: &str,
        num_days: u32,
    ) -> AgrometResult<Vec<DailyWeatherRecord>> {
        if num_days < 1 {
            return Err(AgrometError::InvalidArgument(
                "num_days must be at least 1".to_string(),
            ));
        }
        let station = self.catalog.find_station(station_id)?;
        let mut rng = self.rng_for("daily_weather", &station.name);

        (0..num_days)
            .map(|i| -> AgrometResult<DailyWeatherRecord> {
                let offset = u64::from(num_days - 1 - i);
                let date = self
                    .reference_date
                    .checked_sub_days(Days::new(offset))
                    .ok_or_else(|| {
                        AgrometError::InvalidArgument(format!(
                            "{} days before {} is out of range",
                            offset, self.reference_date
                        ))
                    })?;

                Ok(DailyWeatherRecord {
                    date,
                    station: station.name.clone(),
                    temp_min: TEMP_MIN_RANGE.sample(&mut rng),
                    temp_max: TEMP_MAX_RANGE.sample(&mut rng),
                    humidity_min: HUMIDITY_MIN_RANGE.sample(&mut rng),
                    humidity_max: HUMIDITY_MAX_RANGE.sample(&mut rng),
                    precipitation_mm: PRECIPITATION_RANGE.sample(&mut rng),
                    wind_speed: WIND_SPEED_RANGE.sample(&mut rng),
                    wind_direction: WindDirection::ALL
                        [rng.random_range(0..WindDirection::ALL.len())],
                    insolation_hours: INSOLATION_RANGE.sample(&mut rng),
                })
            })
            .collect()
    }

    /// 36 decades, January first decade to December third decade
    pub fn generate_decade_rainfall(&self, region_id: &str) -> AgrometResult<Vec<DecadeRainfallRecord>> {
        let region = self.catalog.region(region_id)?;
        let mut rng = self.rng_for("decade_rainfall", &region.name);

        let mut records = Vec::with_capacity(12 * DECADES_PER_MONTH as usize);
        for month in 1..=12u32 {
            for decade in 1..=DECADES_PER_MONTH {
                let observed_mm = DECADE_OBSERVED_RANGE.sample(&mut rng);
                let average_30y_mm = DECADE_AVERAGE_RANGE.sample(&mut rng);
                let previous_year_mm = DECADE_PREVIOUS_YEAR_RANGE.sample(&mut rng);

                records.push(DecadeRainfallRecord {
                    month,
                    decade,
                    period_label: period_label(month, decade),
                    observed_mm,
                    average_30y_mm,
                    deviation_mm: observed_mm - average_30y_mm,
                    previous_year_mm,
                });
            }
        }

        Ok(records)
    }

    /// Daily soil water reserve of the region over May 2024
    pub fn generate_soil_water_reserve(&self, region_id: &str) -> AgrometResult<Vec<SoilWaterPoint>> {
        let region = self.catalog.region(region_id)?;
        let mut rng = self.rng_for("soil_water_reserve", &region.name);

        (1..=SOIL_SERIES_DAYS)
            .map(|day| -> AgrometResult<SoilWaterPoint> {
                let date = NaiveDate::from_ymd_opt(SOIL_SERIES_YEAR, SOIL_SERIES_MONTH, day)
                    .ok_or_else(|| AgrometError::InvalidArgument(format!("invalid day {}", day)))?;
                Ok(SoilWaterPoint {
                    date,
                    reserve_pct: SOIL_RESERVE_RANGE.sample(&mut rng),
                })
            })
            .collect()
    }

    fn rng_for(&self, stream: &str, key: &str) -> StdRng {
        StdRng::seed_from_u64(self.seed ^ stream_hash(stream, key))
    }
}

/// FNV-1a over `stream`, a separator byte and `key`
fn stream_hash(stream: &str, key: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;

    stream
        .bytes()
        .chain(std::iter::once(0xff))
        .chain(key.bytes())
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}
