//! Bulletin builders
//!
//! `build_bulletin` dispatches a dashboard selection to one of the six
//! views, draws its data from the generator and assembles the page.

mod content;
mod render;

use rust_decimal::Decimal;

use crate::error::{AgrometError, AgrometResult};
use crate::generator::ClimateDataGenerator;
use crate::metrics::{
    classify_rain_outlook, classify_satisfaction, classify_soil_reserve, daily_delta,
    SOIL_CRITICAL_PCT, SOIL_OPTIMAL_PCT,
};
use crate::models::{
    AdviceBulletin, Bulletin, BulletinContent, BulletinKind, CalendarEntry, Chart, ChartPoint,
    ChartSeries, ChartThreshold, CropWaterSatisfactionBulletin, DailyWeatherBulletin,
    DailyWeatherRecord, RainOutlook, RainfallRow, RainfallSituationBulletin, SatisfactionLevel,
    SeasonProbability, SeasonalForecastBulletin, SeasonalMonth, SeriesKind, Selection,
    SoilWaterReserveBulletin, Station,
};
use crate::types::{AlertLevel, Banner, MetricCard};

pub use render::render_text;

/// Render the view named in `selection` for its region and station
pub fn build_bulletin(
    generator: &ClimateDataGenerator,
    selection: &Selection,
    days: u32,
) -> AgrometResult<Bulletin> {
    let station = generator
        .catalog()
        .station(&selection.region, &selection.station)?;
    let region = selection.region.as_str();

    let (title, station_name, content) = match selection.view {
        BulletinKind::DailyWeather => (
            format!("Paramètres Météorologiques Journaliers - {}", station.name),
            Some(station.name.clone()),
            BulletinContent::DailyWeather(daily_weather(generator, station, days)?),
        ),
        BulletinKind::RainfallSituation => (
            format!("Situation Pluviométrique - Région {}", region),
            None,
            BulletinContent::RainfallSituation(rainfall_situation(generator, region)?),
        ),
        BulletinKind::SeasonalForecast => (
            format!("Prévision Saisonnière - Région {}", region),
            None,
            BulletinContent::SeasonalForecast(seasonal_forecast()),
        ),
        BulletinKind::CropWaterSatisfaction => (
            format!("Niveau de Satisfaction en Eau des Cultures - Région {}", region),
            None,
            BulletinContent::CropWaterSatisfaction(crop_water_satisfaction()),
        ),
        BulletinKind::SoilWaterReserve => (
            format!("Réserve en Eau du Sol et Prévisions - Région {}", region),
            None,
            BulletinContent::SoilWaterReserve(soil_water_reserve(generator, region)?),
        ),
        BulletinKind::Advice => (
            format!("Avis et Conseils Agrométéorologiques - Région {}", region),
            None,
            BulletinContent::Advice(advice()),
        ),
    };

    Ok(Bulletin {
        kind: selection.view,
        title,
        region: region.to_string(),
        station: station_name,
        issued_on: generator.reference_date(),
        content,
    })
}

fn daily_weather(
    generator: &ClimateDataGenerator,
    station: &Station,
    days: u32,
) -> AgrometResult<DailyWeatherBulletin> {
    let records = generator.generate_daily_weather(&station.name, days)?;
    let latest = records
        .last()
        .ok_or_else(|| AgrometError::InvalidArgument("empty daily series".to_string()))?;

    let card = |label: &str, field: fn(&DailyWeatherRecord) -> Decimal, unit: &str| {
        let series: Vec<Decimal> = records.iter().map(field).collect();
        MetricCard::new(
            label,
            format!("{}{}", field(latest), unit),
            daily_delta(&series).map(|d| signed(d, unit)),
        )
    };
    let cards = vec![
        card("Température Max", |r| r.temp_max, "°C"),
        card("Humidité Max", |r| r.humidity_max, "%"),
        card("Précipitations", |r| r.precipitation_mm, " mm"),
        card("Vitesse Vent", |r| r.wind_speed, " m/s"),
    ];

    let points = |field: fn(&DailyWeatherRecord) -> Decimal| {
        records
            .iter()
            .map(|r| ChartPoint {
                x: r.date.format("%Y-%m-%d").to_string(),
                y: field(r),
            })
            .collect::<Vec<_>>()
    };
    let temperature_chart = Chart {
        title: "Évolution des Températures".to_string(),
        x_label: "Date".to_string(),
        y_label: "Température (°C)".to_string(),
        series: vec![
            series("Temp Max", SeriesKind::Line, points(|r| r.temp_max)),
            series("Temp Min", SeriesKind::Line, points(|r| r.temp_min)),
        ],
        thresholds: Vec::new(),
    };
    let precipitation_chart = Chart {
        title: "Précipitations Journalières".to_string(),
        x_label: "Date".to_string(),
        y_label: "Précipitations (mm)".to_string(),
        series: vec![series(
            "Précipitations",
            SeriesKind::Bar,
            points(|r| r.precipitation_mm),
        )],
        thresholds: Vec::new(),
    };

    Ok(DailyWeatherBulletin {
        cards,
        records,
        temperature_chart,
        precipitation_chart,
    })
}

fn rainfall_situation(
    generator: &ClimateDataGenerator,
    region: &str,
) -> AgrometResult<RainfallSituationBulletin> {
    let records = generator.generate_decade_rainfall(region)?;

    let bars = |name: &str, field: fn(&crate::models::DecadeRainfallRecord) -> Decimal| {
        let points = records
            .iter()
            .map(|r| ChartPoint {
                x: r.period_label.clone(),
                y: field(r),
            })
            .collect();
        series(name, SeriesKind::Bar, points)
    };
    let comparison_chart = Chart {
        title: "Comparaison Pluviométrique par Décade".to_string(),
        x_label: "Période".to_string(),
        y_label: "Précipitations (mm)".to_string(),
        series: vec![
            bars("Pluie observée", |r| r.observed_mm),
            bars("Moyenne 30 ans", |r| r.average_30y_mm),
            bars("Année précédente", |r| r.previous_year_mm),
        ],
        thresholds: Vec::new(),
    };

    let rows = records
        .into_iter()
        .map(|record| RainfallRow {
            deviation_pct: record.deviation_pct(),
            record,
        })
        .collect();

    Ok(RainfallSituationBulletin {
        comparison_chart,
        rows,
    })
}

fn seasonal_forecast() -> SeasonalForecastBulletin {
    let months: Vec<SeasonalMonth> = content::SEASONAL_OUTLOOK
        .iter()
        .map(|(month, rain, temp)| SeasonalMonth {
            month: month.to_string(),
            precipitation_mm: Decimal::from(*rain),
            temperature_c: Decimal::from(*temp),
        })
        .collect();

    let points = |field: fn(&SeasonalMonth) -> Decimal| {
        months
            .iter()
            .map(|m| ChartPoint {
                x: m.month.clone(),
                y: field(m),
            })
            .collect::<Vec<_>>()
    };
    let forecast_chart = Chart {
        title: "Prévisions Saisonnières".to_string(),
        x_label: "Mois".to_string(),
        y_label: "Précipitations (mm) / Température (°C)".to_string(),
        series: vec![
            series("Précipitations (mm)", SeriesKind::Bar, points(|m| m.precipitation_mm)),
            series("Température (°C)", SeriesKind::Line, points(|m| m.temperature_c)),
        ],
        thresholds: Vec::new(),
    };

    SeasonalForecastBulletin {
        season: content::SEASON.to_string(),
        forecast_chart,
        months,
        trends: content::SEASONAL_TRENDS
            .iter()
            .map(|(level, text)| Banner::new(*level, *text))
            .collect(),
        probabilities: content::SEASON_PROBABILITIES
            .iter()
            .map(|(label, pct, change)| SeasonProbability {
                label: label.to_string(),
                probability_pct: Decimal::from(*pct),
                change_pct: Decimal::from(*change),
            })
            .collect(),
    }
}

fn crop_water_satisfaction() -> CropWaterSatisfactionBulletin {
    let stages: Vec<SatisfactionLevel> = content::CROP_STAGES
        .iter()
        .map(|(stage, kc, pct)| {
            let percentage = Decimal::from(*pct);
            SatisfactionLevel {
                stage_label: stage.to_string(),
                kc_label: kc.to_string(),
                percentage,
                band: classify_satisfaction(percentage),
            }
        })
        .collect();

    let satisfaction_chart = Chart {
        title: "Satisfaction en Eau par Stade".to_string(),
        x_label: "Stades de Développement".to_string(),
        y_label: "Niveau de Satisfaction (%)".to_string(),
        series: vec![series(
            "Satisfaction",
            SeriesKind::Bar,
            stages
                .iter()
                .map(|s| ChartPoint {
                    x: format!("{} ({})", s.stage_label, s.kc_label),
                    y: s.percentage,
                })
                .collect(),
        )],
        thresholds: Vec::new(),
    };

    CropWaterSatisfactionBulletin {
        crop: content::CROP.to_string(),
        stages,
        satisfaction_chart,
        sowing_windows: content::SOWING_WINDOWS
            .iter()
            .map(|text| Banner::new(AlertLevel::Info, *text))
            .collect(),
    }
}

fn soil_water_reserve(
    generator: &ClimateDataGenerator,
    region: &str,
) -> AgrometResult<SoilWaterReserveBulletin> {
    let series_points = generator.generate_soil_water_reserve(region)?;
    let values: Vec<Decimal> = series_points.iter().map(|p| p.reserve_pct).collect();
    let current = *values
        .last()
        .ok_or_else(|| AgrometError::InvalidArgument("empty soil water series".to_string()))?;

    let reserve_chart = Chart {
        title: "Évolution de la Réserve en Eau du Sol".to_string(),
        x_label: "Date".to_string(),
        y_label: "Réserve en Eau (%)".to_string(),
        series: vec![series(
            "Réserve en eau (%)",
            SeriesKind::Line,
            series_points
                .iter()
                .map(|p| ChartPoint {
                    x: p.date.format("%Y-%m-%d").to_string(),
                    y: p.reserve_pct,
                })
                .collect(),
        )],
        thresholds: vec![
            ChartThreshold {
                label: "Seuil critique".to_string(),
                value: SOIL_CRITICAL_PCT,
            },
            ChartThreshold {
                label: "Seuil optimal".to_string(),
                value: SOIL_OPTIMAL_PCT,
            },
        ],
    };

    let outlook = content::WEEK_RAIN_OUTLOOK
        .iter()
        .map(|(day, rain)| {
            let rain_mm = Decimal::from(*rain);
            RainOutlook {
                day_label: day.to_string(),
                rain_mm,
                class: classify_rain_outlook(rain_mm),
            }
        })
        .collect();

    Ok(SoilWaterReserveBulletin {
        current_reserve: MetricCard::new(
            "Réserve Utile",
            format!("{}%", current),
            daily_delta(&values).map(|d| signed(d, "%")),
        ),
        current_status: classify_soil_reserve(current),
        field_capacity: MetricCard::new(
            "Capacité au champ",
            format!("{} mm", content::FIELD_CAPACITY_MM),
            Some("Stable".to_string()),
        ),
        series: series_points,
        reserve_chart,
        outlook,
    })
}

fn advice() -> AdviceBulletin {
    AdviceBulletin {
        rice_advice: content::RICE_ADVICE
            .iter()
            .map(|text| Banner::new(AlertLevel::Success, *text))
            .collect(),
        food_crop_advice: content::FOOD_CROP_ADVICE
            .iter()
            .map(|(level, text)| Banner::new(*level, *text))
            .collect(),
        alerts: content::URGENT_ALERTS
            .iter()
            .map(|(level, hazard, recommendation)| {
                Banner::new(*level, format!("{} : {}", hazard, recommendation))
            })
            .collect(),
        calendar: content::CALENDAR
            .iter()
            .map(|(week, activity, weather, priority)| CalendarEntry {
                week: week.to_string(),
                activity: activity.to_string(),
                expected_weather: weather.to_string(),
                priority: *priority,
            })
            .collect(),
    }
}

fn series(name: &str, kind: SeriesKind, points: Vec<ChartPoint>) -> ChartSeries {
    ChartSeries {
        name: name.to_string(),
        kind,
        points,
    }
}

/// Delta with an explicit sign, e.g. `+1.2°C`
fn signed(delta: Decimal, unit: &str) -> String {
    if delta.is_sign_negative() && !delta.is_zero() {
        format!("{}{}", delta, unit)
    } else {
        format!("+{}{}", delta.abs(), unit)
    }
}
