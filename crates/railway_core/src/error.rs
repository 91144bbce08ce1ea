//! Domain validation errors.
//!
//! # Responsibility
//! - Name every way a train/trip/passenger operation can be rejected.
//! - Provide stable machine-readable codes for log events.
//!
//! # Invariants
//! - Every error is surfaced synchronously; no variant is retried internally.
//! - An operation returning an error has not mutated any state.

use crate::model::city::City;
use crate::model::passenger::PassengerId;
use crate::model::train::TrainId;
use crate::model::trip::TripId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RailwayResult<T> = Result<T, RailwayError>;

/// Validation failure raised by the railway domain model.
#[derive(Debug, Clone, PartialEq)]
pub enum RailwayError {
    /// Train capacity is zero, negative or not a finite number.
    InvalidCapacity(f64),
    /// Name is not present in the city registry.
    InvalidCity(String),
    /// Origin and destination resolve to the same city.
    SameCityRoute(City),
    /// Train is already bound to an active trip.
    TrainUnavailable(TrainId),
    /// Train is parked somewhere other than the trip origin.
    StationMismatch { origin: City, last_station: City },
    /// Passenger cargo does not fit into the remaining capacity.
    CapacityExceeded { requested: f64, remaining: f64 },
    /// Passenger cargo weight is negative or not a finite number.
    InvalidWeight(f64),
    /// Passenger is already assigned to a trip.
    AlreadyOnTrip {
        passenger_id: PassengerId,
        trip_id: TripId,
    },
    /// Trip no longer accepts boarding changes.
    TripCompleted(TripId),
}

impl RailwayError {
    /// Stable snake_case code used in `error_code=` log fields.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCapacity(_) => "invalid_capacity",
            Self::InvalidCity(_) => "invalid_city",
            Self::SameCityRoute(_) => "same_city_route",
            Self::TrainUnavailable(_) => "train_unavailable",
            Self::StationMismatch { .. } => "station_mismatch",
            Self::CapacityExceeded { .. } => "capacity_exceeded",
            Self::InvalidWeight(_) => "invalid_weight",
            Self::AlreadyOnTrip { .. } => "already_on_trip",
            Self::TripCompleted(_) => "trip_completed",
        }
    }
}

impl Display for RailwayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCapacity(value) => {
                write!(f, "max cargo weight must be a positive number, got {value}")
            }
            Self::InvalidCity(value) => write!(f, "not a verified city: `{value}`"),
            Self::SameCityRoute(city) => {
                write!(f, "origin and destination cannot both be {city}")
            }
            Self::TrainUnavailable(train_id) => {
                write!(f, "train {train_id} is currently on another trip")
            }
            Self::StationMismatch {
                origin,
                last_station,
            } => write!(
                f,
                "train is at {last_station}, not at the trip origin {origin}"
            ),
            Self::CapacityExceeded {
                requested,
                remaining,
            } => write!(
                f,
                "cargo weight {requested} exceeds remaining capacity {remaining}"
            ),
            Self::InvalidWeight(value) => {
                write!(f, "cargo weight must be a non-negative number, got {value}")
            }
            Self::AlreadyOnTrip {
                passenger_id,
                trip_id,
            } => write!(f, "passenger {passenger_id} is already on trip {trip_id}"),
            Self::TripCompleted(trip_id) => write!(f, "trip {trip_id} is already completed"),
        }
    }
}

impl Error for RailwayError {}

#[cfg(test)]
mod tests {
    use super::RailwayError;
    use crate::model::city::City;

    #[test]
    fn codes_are_snake_case_and_unique() {
        let sanandaj = City::parse("Sanandaj").expect("known city");
        let errors = [
            RailwayError::InvalidCapacity(0.0),
            RailwayError::InvalidCity("Atlantis".to_string()),
            RailwayError::SameCityRoute(sanandaj),
            RailwayError::TrainUnavailable(uuid::Uuid::nil()),
            RailwayError::StationMismatch {
                origin: sanandaj,
                last_station: sanandaj,
            },
            RailwayError::CapacityExceeded {
                requested: 2.0,
                remaining: 1.0,
            },
            RailwayError::InvalidWeight(-1.0),
            RailwayError::AlreadyOnTrip {
                passenger_id: uuid::Uuid::nil(),
                trip_id: uuid::Uuid::nil(),
            },
            RailwayError::TripCompleted(uuid::Uuid::nil()),
        ];

        let mut codes: Vec<&str> = errors.iter().map(RailwayError::code).collect();
        assert!(codes
            .iter()
            .all(|code| code.chars().all(|c| c.is_ascii_lowercase() || c == '_')));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn display_mentions_offending_values() {
        let err = RailwayError::CapacityExceeded {
            requested: 500.0,
            remaining: 120.5,
        };
        assert_eq!(
            err.to_string(),
            "cargo weight 500 exceeds remaining capacity 120.5"
        );
        assert!(RailwayError::InvalidCity("Atlantis".to_string())
            .to_string()
            .contains("Atlantis"));
    }
}
