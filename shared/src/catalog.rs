//! Static catalog of regions and their stations

use rust_decimal::Decimal;

use crate::error::{AgrometError, AgrometResult};
use crate::models::{Region, Station};
use crate::types::GpsCoordinates;

/// Regions and stations served by the bulletin, in display order
#[derive(Debug, Clone)]
pub struct StationCatalog {
    regions: Vec<Region>,
}

impl Default for StationCatalog {
    fn default() -> Self {
        // (region, [(station, lat * 1e6, lon * 1e6)])
        let table: [(&str, [(&str, i64, i64); 3]); 2] = [
            (
                "N'ZI",
                [
                    ("Dimbokro", 6_650_000, -4_700_000),
                    ("Bocanda", 7_066_667, -4_516_667),
                    ("Bongouanou", 6_650_000, -4_200_000),
                ],
            ),
            (
                "GOH",
                [
                    ("Gagnoa", 6_133_333, -5_950_000),
                    ("Ouragahio", 6_316_667, -5_933_333),
                    ("Oumé", 6_366_667, -5_416_667),
                ],
            ),
        ];

        let regions = table
            .iter()
            .map(|(region, stations)| Region {
                name: region.to_string(),
                stations: stations
                    .iter()
                    .map(|(name, lat, lon)| Station {
                        name: name.to_string(),
                        region: region.to_string(),
                        location: GpsCoordinates::new(
                            Decimal::new(*lat, 6).normalize(),
                            Decimal::new(*lon, 6).normalize(),
                        ),
                    })
                    .collect(),
            })
            .collect();

        Self { regions }
    }
}

impl StationCatalog {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn list_regions(&self) -> Vec<String> {
        self.regions.iter().map(|r| r.name.clone()).collect()
    }

    pub fn list_stations(&self, region: &str) -> AgrometResult<Vec<String>> {
        Ok(self.region(region)?.station_names())
    }

    pub fn region(&self, name: &str) -> AgrometResult<&Region> {
        self.regions
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| AgrometError::NotFound(format!("Region '{}'", name)))
    }

    pub fn station(&self, region: &str, name: &str) -> AgrometResult<&Station> {
        self.region(region)?.station(name).ok_or_else(|| {
            AgrometError::NotFound(format!("Station '{}' in region '{}'", name, region))
        })
    }

    /// Look a station up by name alone; names are unique across regions
    pub fn find_station(&self, name: &str) -> AgrometResult<&Station> {
        self.regions
            .iter()
            .find_map(|r| r.station(name))
            .ok_or_else(|| AgrometError::NotFound(format!("Station '{}'", name)))
    }
}
