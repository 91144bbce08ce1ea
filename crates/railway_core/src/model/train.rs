//! Train domain model.
//!
//! # Responsibility
//! - Track where a train is parked, how much cargo it carries and whether it
//!   is bound to a trip.
//!
//! # Invariants
//! - `max_cargo_weight` is at least one gram after rounding.
//! - `last_station` is always a served city.
//! - Capacity never changes after construction.

use crate::error::{RailwayError, RailwayResult};
use crate::model::city::City;
use crate::model::weight::Weight;
use serde::Serialize;
use uuid::Uuid;

/// Stable identifier of a train.
pub type TrainId = Uuid;

/// Physical train with cargo capacity and availability state.
///
/// Not `Clone`: a copy would share the id and could be bound to a second
/// trip while the original is still travelling.
///
/// ```compile_fail
/// let train = railway_core::Train::new("Tehran", 10.0).unwrap();
/// let _copy = train.clone();
/// ```
#[derive(Debug, PartialEq, Serialize)]
pub struct Train {
    id: TrainId,
    last_station: City,
    max_cargo_weight: Weight,
    on_trip: bool,
}

impl Train {
    /// Creates an available train parked at `last_station`.
    ///
    /// # Errors
    /// - `InvalidCapacity` when `max_cargo_weight` (kg) is not finite or
    ///   rounds to less than one gram.
    /// - `InvalidCity` when `last_station` is not a served city.
    pub fn new(last_station: &str, max_cargo_weight: f64) -> RailwayResult<Self> {
        Self::with_state(last_station, max_cargo_weight, false)
    }

    /// Creates a train with an explicit `on_trip` flag.
    ///
    /// Used when a caller imports a train that is already travelling.
    pub fn with_state(
        last_station: &str,
        max_cargo_weight: f64,
        on_trip: bool,
    ) -> RailwayResult<Self> {
        let capacity = Weight::from_kg(max_cargo_weight)
            .filter(|weight| !weight.is_zero())
            .ok_or(RailwayError::InvalidCapacity(max_cargo_weight))?;
        let last_station = City::parse(last_station)?;

        Ok(Self {
            id: Uuid::new_v4(),
            last_station,
            max_cargo_weight: capacity,
            on_trip,
        })
    }

    pub fn id(&self) -> TrainId {
        self.id
    }

    pub fn last_station(&self) -> City {
        self.last_station
    }

    /// Capacity in kilograms.
    pub fn max_cargo_weight(&self) -> f64 {
        self.max_cargo_weight.as_kg()
    }

    pub fn capacity(&self) -> Weight {
        self.max_cargo_weight
    }

    pub fn on_trip(&self) -> bool {
        self.on_trip
    }

    /// Binds this train to a trip.
    pub fn mark_on_trip(&mut self) {
        self.on_trip = true;
    }

    /// Releases this train at `arrived_at`, making it available again.
    pub fn finish_trip(&mut self, arrived_at: City) {
        self.last_station = arrived_at;
        self.on_trip = false;
    }
}

#[cfg(test)]
mod tests {
    use super::Train;
    use crate::error::RailwayError;

    #[test]
    fn new_train_is_available() {
        let train = Train::new("Sanandaj", 34_286.0).expect("valid train");
        assert!(!train.on_trip());
        assert_eq!(train.last_station().name(), "Sanandaj");
        assert_eq!(train.max_cargo_weight(), 34_286.0);
        assert!(!train.id().is_nil());
    }

    #[test]
    fn capacity_is_checked_before_city() {
        let err = Train::new("Atlantis", 0.0).unwrap_err();
        assert_eq!(err, RailwayError::InvalidCapacity(0.0));
    }

    #[test]
    fn unknown_station_with_valid_capacity_is_invalid_city() {
        assert_eq!(
            Train::new("Atlantis", 10.0).unwrap_err(),
            RailwayError::InvalidCity("Atlantis".to_string())
        );
        assert_eq!(
            Train::new("   ", 10.0).unwrap_err(),
            RailwayError::InvalidCity("   ".to_string())
        );
    }

    #[test]
    fn sub_gram_capacity_is_rejected() {
        assert_eq!(
            Train::new("Tehran", 0.0004).unwrap_err(),
            RailwayError::InvalidCapacity(0.0004)
        );
        assert!(matches!(
            Train::new("Tehran", -3.0),
            Err(RailwayError::InvalidCapacity(_))
        ));
    }

    #[test]
    fn non_finite_capacity_is_rejected() {
        assert!(matches!(
            Train::new("Tehran", f64::INFINITY),
            Err(RailwayError::InvalidCapacity(_))
        ));
        assert!(matches!(
            Train::new("Tehran", f64::NAN),
            Err(RailwayError::InvalidCapacity(_))
        ));
    }

    #[test]
    fn finish_trip_moves_and_releases_train() {
        let mut train = Train::with_state("Tehran", 100.0, true).expect("valid train");
        let qom = crate::model::city::City::parse("Qom").expect("known city");

        train.finish_trip(qom);
        assert!(!train.on_trip());
        assert_eq!(train.last_station(), qom);
    }
}
