//! Passenger domain model.
//!
//! # Responsibility
//! - Carry a traveller's cargo weight and current trip assignment.
//!
//! # Invariants
//! - `cargo_weight` is finite and non-negative, held at gram resolution.
//! - `trip_id` is `Some` iff the passenger is in that trip's boarding list.

use crate::error::{RailwayError, RailwayResult};
use crate::model::trip::{TrainTrip, TripId};
use crate::model::weight::Weight;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a passenger.
pub type PassengerId = Uuid;

/// Traveller contributing cargo weight against a trip's capacity.
///
/// Not `Clone`: a copy would share the id and could board a second trip.
///
/// ```compile_fail
/// let passenger = railway_core::Passenger::new("Ali", 1.0).unwrap();
/// let _copy = passenger.clone();
/// ```
#[derive(Debug, PartialEq, Serialize)]
pub struct Passenger {
    id: PassengerId,
    name: String,
    cargo_weight: Weight,
    trip_id: Option<TripId>,
}

impl Passenger {
    /// Creates an unassigned passenger.
    ///
    /// # Errors
    /// - `InvalidWeight` when `cargo_weight` (kg) is negative or not finite.
    pub fn new(name: impl Into<String>, cargo_weight: f64) -> RailwayResult<Self> {
        let cargo =
            Weight::from_kg(cargo_weight).ok_or(RailwayError::InvalidWeight(cargo_weight))?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            cargo_weight: cargo,
            trip_id: None,
        })
    }

    pub fn id(&self) -> PassengerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cargo weight in kilograms.
    pub fn cargo_weight(&self) -> f64 {
        self.cargo_weight.as_kg()
    }

    pub fn cargo(&self) -> Weight {
        self.cargo_weight
    }

    /// Trip this passenger is currently on.
    pub fn trip_id(&self) -> Option<TripId> {
        self.trip_id
    }

    pub fn is_on_trip(&self) -> bool {
        self.trip_id.is_some()
    }

    /// Boards `trip`.
    ///
    /// # Errors
    /// - `AlreadyOnTrip` when this passenger is assigned to any trip.
    /// - Errors of `TrainTrip::add_passenger` are propagated unchanged.
    pub fn join_trip(&mut self, trip: &mut TrainTrip) -> RailwayResult<()> {
        if let Some(trip_id) = self.trip_id {
            return Err(RailwayError::AlreadyOnTrip {
                passenger_id: self.id,
                trip_id,
            });
        }
        trip.add_passenger(self)
    }

    /// Leaves `trip` when it is the trip this passenger is on.
    ///
    /// Any other case is a no-op. Returns whether the passenger left.
    /// To leave through the passenger's own back-reference without holding
    /// the trip, use `RailwayService::leave_trip`.
    pub fn leave_trip(&mut self, trip: &mut TrainTrip) -> bool {
        if self.trip_id != Some(trip.id()) {
            return false;
        }
        trip.remove_passenger(self);
        true
    }

    pub(crate) fn assign_trip(&mut self, trip_id: Option<TripId>) {
        self.trip_id = trip_id;
    }
}

impl Display for Passenger {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
