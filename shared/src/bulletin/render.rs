//! Plain-text rendering of bulletins

use std::fmt::Write;

use rust_decimal::Decimal;

use crate::models::{
    AdviceBulletin, Bulletin, BulletinContent, Chart, CropWaterSatisfactionBulletin,
    DailyWeatherBulletin, RainfallSituationBulletin, SeasonalForecastBulletin,
    SoilWaterReserveBulletin,
};
use crate::types::{Banner, MetricCard};

/// Render a bulletin as a readable text report
pub fn render_text(bulletin: &Bulletin) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", bulletin.title);
    let _ = writeln!(out, "{}", "=".repeat(bulletin.title.chars().count()));
    let _ = write!(out, "Région : {}", bulletin.region);
    if let Some(station) = &bulletin.station {
        let _ = write!(out, " | Station : {}", station);
    }
    let _ = writeln!(out, " | Bulletin du {}", bulletin.issued_on.format("%d/%m/%Y"));
    out.push('\n');

    match &bulletin.content {
        BulletinContent::DailyWeather(daily) => daily_weather(&mut out, daily),
        BulletinContent::RainfallSituation(rainfall) => rainfall_situation(&mut out, rainfall),
        BulletinContent::SeasonalForecast(seasonal) => seasonal_forecast(&mut out, seasonal),
        BulletinContent::CropWaterSatisfaction(crop) => crop_water_satisfaction(&mut out, crop),
        BulletinContent::SoilWaterReserve(soil) => soil_water_reserve(&mut out, soil),
        BulletinContent::Advice(advice) => advice_section(&mut out, advice),
    }

    out
}

fn daily_weather(out: &mut String, daily: &DailyWeatherBulletin) {
    cards(out, &daily.cards);

    heading(out, &format!("Données des {} derniers jours", daily.records.len()));
    let _ = writeln!(
        out,
        "{:<10} {:>6} {:>6} {:>6} {:>6} {:>6} {:>5} {:>3} {:>5}",
        "Date", "Tmin", "Tmax", "Hmin", "Hmax", "Pluie", "Vent", "Dir", "Ins."
    );
    for r in &daily.records {
        let _ = writeln!(
            out,
            "{:<10} {:>6} {:>6} {:>6} {:>6} {:>6} {:>5} {:>3} {:>5}",
            r.date.format("%Y-%m-%d").to_string(),
            r.temp_min,
            r.temp_max,
            r.humidity_min,
            r.humidity_max,
            r.precipitation_mm,
            r.wind_speed,
            r.wind_direction.to_string(),
            r.insolation_hours
        );
    }

    chart(out, &daily.temperature_chart);
    chart(out, &daily.precipitation_chart);
}

fn rainfall_situation(out: &mut String, rainfall: &RainfallSituationBulletin) {
    chart(out, &rainfall.comparison_chart);

    heading(out, "Écarts par rapport à la normale");
    let _ = writeln!(
        out,
        "{:<16} {:>8} {:>8} {:>8} {:>8}",
        "Période", "Obs.", "Norm.", "Écart", "Écart %"
    );
    for row in &rainfall.rows {
        let pct = row
            .deviation_pct
            .map(|p| p.to_string())
            .unwrap_or_else(|| "n/a".to_string());
        let _ = writeln!(
            out,
            "{:<16} {:>8} {:>8} {:>8} {:>8}",
            row.record.period_label,
            row.record.observed_mm,
            row.record.average_30y_mm,
            row.record.deviation_mm,
            pct
        );
    }
}

fn seasonal_forecast(out: &mut String, seasonal: &SeasonalForecastBulletin) {
    let _ = writeln!(out, "Prévisions pour la saison agricole {}", seasonal.season);
    chart(out, &seasonal.forecast_chart);

    heading(out, "Tendances Attendues");
    banners(out, &seasonal.trends);

    heading(out, "Probabilités");
    for p in &seasonal.probabilities {
        let arrow = if p.change_pct.is_sign_negative() { "↓" } else { "↑" };
        let _ = writeln!(
            out,
            "{:<16} {:>4}% ({} {}%)",
            p.label,
            p.probability_pct,
            arrow,
            p.change_pct.abs()
        );
    }
}

fn crop_water_satisfaction(out: &mut String, crop: &CropWaterSatisfactionBulletin) {
    heading(out, &format!("État des Cultures ({})", crop.crop));
    for stage in &crop.stages {
        let _ = writeln!(
            out,
            "{} {} ({}) : {}% - {}",
            stage.band.alert_level().marker(),
            stage.stage_label,
            stage.kc_label,
            stage.percentage,
            stage.band.label_fr()
        );
    }

    heading(out, "Dates de Semis Recommandées");
    banners(out, &crop.sowing_windows);
}

fn soil_water_reserve(out: &mut String, soil: &SoilWaterReserveBulletin) {
    chart(out, &soil.reserve_chart);

    heading(out, "Prévisions 7 Jours");
    for day in &soil.outlook {
        let _ = writeln!(
            out,
            "{} {} : {}mm - {}",
            day.class.alert_level().marker(),
            day.day_label,
            day.rain_mm,
            day.class.label_fr()
        );
    }

    heading(out, "État Actuel");
    cards(out, &[soil.current_reserve.clone(), soil.field_capacity.clone()]);
}

fn advice_section(out: &mut String, advice: &AdviceBulletin) {
    heading(out, "Riziculture");
    banners(out, &advice.rice_advice);

    heading(out, "Cultures Vivrières");
    banners(out, &advice.food_crop_advice);

    heading(out, "Alertes et Recommandations Urgentes");
    banners(out, &advice.alerts);

    heading(out, "Calendrier Agricole - Prochaines Semaines");
    for entry in &advice.calendar {
        let _ = writeln!(
            out,
            "{:<10} | {:<42} | {:<30} | {}",
            entry.week,
            entry.activity,
            entry.expected_weather,
            entry.priority.label_fr()
        );
    }
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n## {}", title);
}

fn cards(out: &mut String, cards: &[MetricCard]) {
    for card in cards {
        match &card.delta {
            Some(delta) => {
                let _ = writeln!(out, "{:<18} {:>10} ({})", card.label, card.value, delta);
            }
            None => {
                let _ = writeln!(out, "{:<18} {:>10}", card.label, card.value);
            }
        }
    }
}

fn banners(out: &mut String, banners: &[Banner]) {
    for banner in banners {
        let _ = writeln!(out, "{} {}", banner.level.marker(), banner.message);
    }
}

/// Charts are summarised as the range of each series
fn chart(out: &mut String, chart: &Chart) {
    heading(out, &chart.title);
    for series in &chart.series {
        let values = series.points.iter().map(|p| p.y);
        let min = values.clone().min().unwrap_or(Decimal::ZERO);
        let max = values.max().unwrap_or(Decimal::ZERO);
        let _ = writeln!(
            out,
            "{} : {} points, min {} / max {}",
            series.name,
            series.points.len(),
            min,
            max
        );
    }
    for threshold in &chart.thresholds {
        let _ = writeln!(out, "{} : {}", threshold.label, threshold.value);
    }
}
