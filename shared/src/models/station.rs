//! Observation stations and the regions they belong to

use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// A synoptic or agro-climatic station
///
/// Identity is the `(region, name)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    pub name: String,
    pub region: String,
    pub location: GpsCoordinates,
}

impl Station {
    pub fn latitude(&self) -> rust_decimal::Decimal {
        self.location.latitude
    }

    pub fn longitude(&self) -> rust_decimal::Decimal {
        self.location.longitude
    }
}

/// An administrative region and its stations, in display order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    pub name: String,
    pub stations: Vec<Station>,
}

impl Region {
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.name == name)
    }

    pub fn station_names(&self) -> Vec<String> {
        self.stations.iter().map(|s| s.name.clone()).collect()
    }
}
