//! Dashboard service: catalog lookups, generated series and bulletins

use std::sync::Arc;

use shared::{
    build_bulletin, render_text, validate_day_count, Bulletin, ClimateDataGenerator,
    DailyWeatherRecord, RainfallRow, Selection,
};

use crate::error::{AppError, AppResult};

/// Service wrapping the synthetic data generator
#[derive(Clone)]
pub struct DashboardService {
    generator: Arc<ClimateDataGenerator>,
    default_days: u32,
}

impl DashboardService {
    pub fn new(generator: Arc<ClimateDataGenerator>, default_days: u32) -> Self {
        Self {
            generator,
            default_days,
        }
    }

    pub fn list_regions(&self) -> Vec<String> {
        self.generator.catalog().list_regions()
    }

    pub fn list_stations(&self, region: &str) -> AppResult<Vec<String>> {
        Ok(self.generator.catalog().list_stations(region)?)
    }

    /// Daily weather for a station; `days` falls back to the configured default
    pub fn daily_weather(
        &self,
        station: &str,
        days: Option<u32>,
    ) -> AppResult<Vec<DailyWeatherRecord>> {
        let days = self.day_count(days)?;
        let records = self.generator.generate_daily_weather(station, days)?;

        tracing::debug!(station, days, "Generated daily weather");
        Ok(records)
    }

    /// Decade rainfall for a region with the percentage deviation of each decade
    pub fn decade_rainfall(&self, region: &str) -> AppResult<Vec<RainfallRow>> {
        let rows = self
            .generator
            .generate_decade_rainfall(region)?
            .into_iter()
            .map(|record| RainfallRow {
                deviation_pct: record.deviation_pct(),
                record,
            })
            .collect();

        tracing::debug!(region, "Generated decade rainfall");
        Ok(rows)
    }

    pub fn bulletin(&self, selection: &Selection, days: Option<u32>) -> AppResult<Bulletin> {
        let days = self.day_count(days)?;
        let bulletin = build_bulletin(&self.generator, selection, days)?;

        tracing::debug!(
            view = %selection.view,
            region = %selection.region,
            station = %selection.station,
            "Rendered bulletin"
        );
        Ok(bulletin)
    }

    pub fn bulletin_text(&self, selection: &Selection, days: Option<u32>) -> AppResult<String> {
        Ok(render_text(&self.bulletin(selection, days)?))
    }

    fn day_count(&self, days: Option<u32>) -> AppResult<u32> {
        let days = days.unwrap_or(self.default_days);
        validate_day_count(days).map_err(|msg| AppError::validation("days", msg))?;
        Ok(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{BulletinKind, StationCatalog};

    fn service() -> DashboardService {
        let generator = ClimateDataGenerator::new(StationCatalog::default(), 42)
            .with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        DashboardService::new(Arc::new(generator), 7)
    }

    #[test]
    fn test_default_day_count() {
        let records = service().daily_weather("Bocanda", None).unwrap();
        assert_eq!(records.len(), 7);
    }

    #[test]
    fn test_day_count_bounds() {
        let service = service();
        assert!(matches!(
            service.daily_weather("Bocanda", Some(0)),
            Err(AppError::Validation { .. })
        ));
        assert!(matches!(
            service.daily_weather("Bocanda", Some(367)),
            Err(AppError::Validation { .. })
        ));
        assert_eq!(service.daily_weather("Bocanda", Some(366)).unwrap().len(), 366);
    }

    #[test]
    fn test_rainfall_rows_carry_deviation() {
        let rows = service().decade_rainfall("GOH").unwrap();
        assert_eq!(rows.len(), 36);
        for row in rows {
            assert_eq!(row.deviation_pct, row.record.deviation_pct());
        }
    }

    proptest::proptest! {
        #[test]
        fn prop_accepted_day_counts_yield_that_many_records(days in 1u32..=366) {
            let records = service().daily_weather("Gagnoa", Some(days)).unwrap();
            proptest::prop_assert_eq!(records.len(), days as usize);
        }
    }

    #[test]
    fn test_bulletin_text_header() {
        let selection = Selection {
            region: "N'ZI".to_string(),
            station: "Bongouanou".to_string(),
            view: BulletinKind::SoilWaterReserve,
        };
        let text = service().bulletin_text(&selection, None).unwrap();
        assert!(text.starts_with("Réserve en Eau du Sol"));
    }
}
