//! Bulletin view models
//!
//! A bulletin is the declarative content of one dashboard page: metric
//! cards, tables, chart series and coloured banners. Rendering to pixels is
//! left to the client; `crate::bulletin::render_text` gives a plain-text
//! rendition.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AgrometError;
use crate::models::{
    DailyWeatherRecord, DecadeRainfallRecord, RainOutlook, SatisfactionLevel, SoilReserveStatus,
    SoilWaterPoint,
};
use crate::types::{Banner, MetricCard};

/// The six entries of the navigation menu
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum BulletinKind {
    #[default]
    DailyWeather,
    RainfallSituation,
    SeasonalForecast,
    CropWaterSatisfaction,
    SoilWaterReserve,
    Advice,
}

impl BulletinKind {
    /// Menu order
    pub const ALL: [BulletinKind; 6] = [
        BulletinKind::DailyWeather,
        BulletinKind::RainfallSituation,
        BulletinKind::SeasonalForecast,
        BulletinKind::CropWaterSatisfaction,
        BulletinKind::SoilWaterReserve,
        BulletinKind::Advice,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            BulletinKind::DailyWeather => "daily_weather",
            BulletinKind::RainfallSituation => "rainfall_situation",
            BulletinKind::SeasonalForecast => "seasonal_forecast",
            BulletinKind::CropWaterSatisfaction => "crop_water_satisfaction",
            BulletinKind::SoilWaterReserve => "soil_water_reserve",
            BulletinKind::Advice => "advice",
        }
    }

    /// Menu label
    pub fn label_fr(&self) -> &'static str {
        match self {
            BulletinKind::DailyWeather => "Paramètres Météo Journaliers",
            BulletinKind::RainfallSituation => "Situation Pluviométrique",
            BulletinKind::SeasonalForecast => "Prévision Saisonnière",
            BulletinKind::CropWaterSatisfaction => "Satisfaction en Eau des Cultures",
            BulletinKind::SoilWaterReserve => "Réserve en Eau du Sol",
            BulletinKind::Advice => "Avis et Conseils",
        }
    }
}

impl std::str::FromStr for BulletinKind {
    type Err = AgrometError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BulletinKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| AgrometError::NotFound(format!("Bulletin view '{}'", s)))
    }
}

impl std::fmt::Display for BulletinKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// A rendered bulletin page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bulletin {
    pub kind: BulletinKind,
    pub title: String,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    pub issued_on: NaiveDate,
    pub content: BulletinContent,
}

/// View-specific content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum BulletinContent {
    DailyWeather(DailyWeatherBulletin),
    RainfallSituation(RainfallSituationBulletin),
    SeasonalForecast(SeasonalForecastBulletin),
    CropWaterSatisfaction(CropWaterSatisfactionBulletin),
    SoilWaterReserve(SoilWaterReserveBulletin),
    Advice(AdviceBulletin),
}

// ============================================================================
// Charts
// ============================================================================

/// A chart described as data series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ChartSeries>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub thresholds: Vec<ChartThreshold>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Line,
    Bar,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub kind: SeriesKind,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub x: String,
    pub y: Decimal,
}

/// Horizontal reference line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartThreshold {
    pub label: String,
    pub value: Decimal,
}

// ============================================================================
// View contents
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyWeatherBulletin {
    pub cards: Vec<MetricCard>,
    pub records: Vec<DailyWeatherRecord>,
    pub temperature_chart: Chart,
    pub precipitation_chart: Chart,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RainfallSituationBulletin {
    pub comparison_chart: Chart,
    pub rows: Vec<RainfallRow>,
}

/// A decade record with its percentage deviation, `None` rendered as "n/a"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RainfallRow {
    #[serde(flatten)]
    pub record: DecadeRainfallRecord,
    pub deviation_pct: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonalForecastBulletin {
    pub season: String,
    pub months: Vec<SeasonalMonth>,
    pub forecast_chart: Chart,
    pub trends: Vec<Banner>,
    pub probabilities: Vec<SeasonProbability>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonalMonth {
    pub month: String,
    pub precipitation_mm: Decimal,
    pub temperature_c: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonProbability {
    pub label: String,
    pub probability_pct: Decimal,
    /// Change against the previous outlook, in points
    pub change_pct: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropWaterSatisfactionBulletin {
    pub crop: String,
    pub stages: Vec<SatisfactionLevel>,
    pub satisfaction_chart: Chart,
    pub sowing_windows: Vec<Banner>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilWaterReserveBulletin {
    pub series: Vec<SoilWaterPoint>,
    pub reserve_chart: Chart,
    pub outlook: Vec<RainOutlook>,
    pub current_reserve: MetricCard,
    pub current_status: SoilReserveStatus,
    pub field_capacity: MetricCard,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdviceBulletin {
    pub rice_advice: Vec<Banner>,
    pub food_crop_advice: Vec<Banner>,
    pub alerts: Vec<Banner>,
    pub calendar: Vec<CalendarEntry>,
}

/// One week of the agricultural calendar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarEntry {
    pub week: String,
    pub activity: String,
    pub expected_weather: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn label_fr(&self) -> &'static str {
        match self {
            Priority::High => "Haute",
            Priority::Medium => "Moyenne",
        }
    }
}
