//! Shared types and logic for the AGROMET_RCI bulletin platform
//!
//! This crate contains the station catalog, the synthetic climate generator,
//! derived metrics and bulletin builders shared between the backend and the
//! browser front-end (via WASM).

pub mod bulletin;
pub mod catalog;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod models;
pub mod types;
pub mod validation;

pub use bulletin::{build_bulletin, render_text};
pub use catalog::StationCatalog;
pub use error::{AgrometError, AgrometResult};
pub use generator::ClimateDataGenerator;
pub use metrics::*;
pub use models::*;
pub use types::*;
pub use validation::*;
