//! Train trip domain model.
//!
//! # Responsibility
//! - Validate a route and bind one available train to it.
//! - Own the ordered boarding list and derive remaining cargo capacity.
//!
//! # Invariants
//! - Origin and destination are distinct served cities.
//! - At construction the train was available and parked at the origin.
//! - Sum of boarded cargo weight never exceeds the train capacity. Weights
//!   are whole grams (`Weight`), so the check is exact.
//! - Boarding order is insertion order; a passenger appears at most once.
//! - A completed trip has no passengers and accepts no new ones.

use crate::error::{RailwayError, RailwayResult};
use crate::model::city::City;
use crate::model::passenger::{Passenger, PassengerId};
use crate::model::train::{Train, TrainId};
use crate::model::weight::Weight;
use serde::Serialize;
use uuid::Uuid;

/// Stable identifier of a trip.
pub type TripId = Uuid;

/// Trip lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    /// Passengers may join and leave.
    Boarding,
    /// Train has arrived; all passengers were detached.
    Completed,
}

/// One passenger slot in the boarding list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardingEntry {
    pub passenger_id: PassengerId,
    /// Copied at boarding time; passenger cargo is immutable.
    pub cargo_weight: Weight,
}

/// Trip between two cities served by one train.
///
/// Not `Clone`: a copy would hold its own boarding list under the same id.
#[derive(Debug, PartialEq, Serialize)]
pub struct TrainTrip {
    id: TripId,
    origin_city: City,
    destination_city: City,
    train_id: TrainId,
    /// Copied from the train; capacity never changes after construction.
    max_cargo_weight: Weight,
    passengers: Vec<BoardingEntry>,
    status: TripStatus,
}

impl TrainTrip {
    /// Validates the route, binds `train` and returns an empty trip.
    ///
    /// Checks run in this order and the first failure wins:
    /// 1. both endpoints are served cities (`InvalidCity`),
    /// 2. endpoints differ (`SameCityRoute`),
    /// 3. train is not on another trip (`TrainUnavailable`),
    /// 4. train is parked at the origin (`StationMismatch`).
    ///
    /// # Side effects
    /// - Marks `train` as on-trip, only on success.
    pub fn new(
        origin_city: &str,
        destination_city: &str,
        train: &mut Train,
    ) -> RailwayResult<Self> {
        let origin_city = City::parse(origin_city)?;
        let destination_city = City::parse(destination_city)?;

        if origin_city == destination_city {
            return Err(RailwayError::SameCityRoute(origin_city));
        }
        if train.on_trip() {
            return Err(RailwayError::TrainUnavailable(train.id()));
        }
        if origin_city != train.last_station() {
            return Err(RailwayError::StationMismatch {
                origin: origin_city,
                last_station: train.last_station(),
            });
        }

        train.mark_on_trip();
        Ok(Self {
            id: Uuid::new_v4(),
            origin_city,
            destination_city,
            train_id: train.id(),
            max_cargo_weight: train.capacity(),
            passengers: Vec::new(),
            status: TripStatus::Boarding,
        })
    }

    pub fn id(&self) -> TripId {
        self.id
    }

    pub fn origin_city(&self) -> City {
        self.origin_city
    }

    pub fn destination_city(&self) -> City {
        self.destination_city
    }

    pub fn train_id(&self) -> TrainId {
        self.train_id
    }

    pub fn status(&self) -> TripStatus {
        self.status
    }

    /// Capacity in kilograms.
    pub fn max_cargo_weight(&self) -> f64 {
        self.max_cargo_weight.as_kg()
    }

    /// Kilograms currently on board.
    pub fn loaded_weight(&self) -> f64 {
        self.loaded().as_kg()
    }

    /// Kilograms left for new passengers.
    ///
    /// Recomputed from the boarding list on every call.
    pub fn remaining_capacity(&self) -> f64 {
        self.remaining().as_kg()
    }

    /// Exact sum of boarded cargo.
    pub fn loaded(&self) -> Weight {
        self.passengers.iter().map(|entry| entry.cargo_weight).sum()
    }

    /// Exact capacity left; never negative.
    pub fn remaining(&self) -> Weight {
        self.max_cargo_weight.saturating_sub(self.loaded())
    }

    /// Passenger ids in boarding order.
    pub fn passenger_ids(&self) -> Vec<PassengerId> {
        self.passengers
            .iter()
            .map(|entry| entry.passenger_id)
            .collect()
    }

    pub fn boarding_list(&self) -> &[BoardingEntry] {
        &self.passengers
    }

    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    pub fn contains(&self, passenger_id: PassengerId) -> bool {
        self.passengers
            .iter()
            .any(|entry| entry.passenger_id == passenger_id)
    }

    /// Appends `passenger` to the boarding list and sets its back-reference.
    ///
    /// # Errors
    /// - `TripCompleted` when the trip no longer boards.
    /// - `AlreadyOnTrip` when the passenger is on this or another trip.
    /// - `CapacityExceeded` when the loaded weight plus its cargo would be
    ///   above the train capacity.
    pub fn add_passenger(&mut self, passenger: &mut Passenger) -> RailwayResult<()> {
        if self.status == TripStatus::Completed {
            return Err(RailwayError::TripCompleted(self.id));
        }
        if let Some(trip_id) = passenger.trip_id() {
            return Err(RailwayError::AlreadyOnTrip {
                passenger_id: passenger.id(),
                trip_id,
            });
        }
        if self.contains(passenger.id()) {
            return Err(RailwayError::AlreadyOnTrip {
                passenger_id: passenger.id(),
                trip_id: self.id,
            });
        }

        let fits = self
            .loaded()
            .checked_add(passenger.cargo())
            .is_some_and(|total| total <= self.max_cargo_weight);
        if !fits {
            return Err(RailwayError::CapacityExceeded {
                requested: passenger.cargo_weight(),
                remaining: self.remaining_capacity(),
            });
        }

        self.passengers.push(BoardingEntry {
            passenger_id: passenger.id(),
            cargo_weight: passenger.cargo(),
        });
        passenger.assign_trip(Some(self.id));
        Ok(())
    }

    /// Removes `passenger` from the boarding list.
    ///
    /// Absent passengers are a no-op. The back-reference is cleared only when
    /// it names this trip. Returns whether an entry was removed.
    pub fn remove_passenger(&mut self, passenger: &mut Passenger) -> bool {
        let before = self.passengers.len();
        self.passengers
            .retain(|entry| entry.passenger_id != passenger.id());
        if passenger.trip_id() == Some(self.id) {
            passenger.assign_trip(None);
        }
        self.passengers.len() != before
    }

    /// Closes boarding and returns the passengers that were on board.
    ///
    /// Callers own clearing the returned passengers' back-references and
    /// releasing the train.
    pub(crate) fn complete(&mut self) -> RailwayResult<Vec<PassengerId>> {
        if self.status == TripStatus::Completed {
            return Err(RailwayError::TripCompleted(self.id));
        }
        self.status = TripStatus::Completed;
        Ok(self
            .passengers
            .drain(..)
            .map(|entry| entry.passenger_id)
            .collect())
    }
}
