//! Core domain logic for the railway trip manager.
//! This crate is the single source of truth for capacity and routing rules.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod service;

pub use config::CoreConfig;
pub use error::{RailwayError, RailwayResult};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::city::{all_cities, is_valid_city, resolve_city, City, CityRegistry};
pub use model::passenger::{Passenger, PassengerId};
pub use model::train::{Train, TrainId};
pub use model::trip::{BoardingEntry, TrainTrip, TripId, TripStatus};
pub use model::weight::Weight;
pub use service::railway_service::{RailwayService, ServiceError, ServiceResult, TripCompletion};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
