//! HTTP handlers for the AGROMET_RCI API

pub mod auth;
pub mod bulletin;
pub mod catalog;
pub mod climate;
pub mod health;
pub mod metrics;

pub use auth::*;
pub use bulletin::*;
pub use catalog::*;
pub use climate::*;
pub use health::*;
pub use metrics::*;
