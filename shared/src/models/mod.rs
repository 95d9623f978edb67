//! Domain models for the AGROMET_RCI platform

mod bulletin;
mod rainfall;
mod satisfaction;
mod session;
mod soil;
mod station;
mod weather;

pub use bulletin::*;
pub use rainfall::*;
pub use satisfaction::*;
pub use session::*;
pub use soil::*;
pub use station::*;
pub use weather::*;
