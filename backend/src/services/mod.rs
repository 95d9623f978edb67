//! Business logic services for the AGROMET_RCI dashboard

pub mod dashboard;
pub mod session;

pub use dashboard::DashboardService;
pub use session::{SelectionUpdate, SessionStore};
