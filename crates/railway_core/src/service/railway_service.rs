//! In-memory railway use-case service.
//!
//! # Responsibility
//! - Own trains, trips and passengers and resolve them by stable id.
//! - Expose boarding use-cases driven by the passenger back-reference.
//! - Emit metadata-only log events for every mutation.
//!
//! # Invariants
//! - Service APIs never bypass model validation.
//! - A rejected call leaves all stored entities unchanged.
//! - Passenger names never reach log output.
//!
//! Mutators take `&mut self`, so a capacity check and the following append
//! happen under one borrow. Hosts sharing a service across threads wrap it in
//! a `Mutex`.

use crate::error::RailwayError;
use crate::model::passenger::{Passenger, PassengerId};
use crate::model::train::{Train, TrainId};
use crate::model::trip::{TrainTrip, TripId};
use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for railway use-cases.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    TrainNotFound(TrainId),
    TripNotFound(TripId),
    PassengerNotFound(PassengerId),
    /// Domain validation failure.
    Domain(RailwayError),
}

impl ServiceError {
    /// Stable code used in `error_code=` log fields.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TrainNotFound(_) => "train_not_found",
            Self::TripNotFound(_) => "trip_not_found",
            Self::PassengerNotFound(_) => "passenger_not_found",
            Self::Domain(err) => err.code(),
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TrainNotFound(id) => write!(f, "train not found: {id}"),
            Self::TripNotFound(id) => write!(f, "trip not found: {id}"),
            Self::PassengerNotFound(id) => write!(f, "passenger not found: {id}"),
            Self::Domain(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Domain(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RailwayError> for ServiceError {
    fn from(value: RailwayError) -> Self {
        Self::Domain(value)
    }
}

/// Result of closing a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripCompletion {
    pub trip_id: TripId,
    pub train_id: TrainId,
    /// Passengers detached on arrival, in boarding order.
    pub detached_passengers: Vec<PassengerId>,
}

/// Railway facade over in-memory entity stores.
#[derive(Debug, Default)]
pub struct RailwayService {
    trains: BTreeMap<TrainId, Train>,
    trips: BTreeMap<TripId, TrainTrip>,
    passengers: BTreeMap<PassengerId, Passenger>,
}

impl RailwayService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an available train parked at `last_station`.
    pub fn register_train(
        &mut self,
        last_station: &str,
        max_cargo_weight: f64,
    ) -> ServiceResult<TrainId> {
        let train = Train::new(last_station, max_cargo_weight)
            .map_err(|err| rejected("train_register", "train", err))?;
        let train_id = train.id();
        info!(
            "event=train_register module=train status=ok train_id={} station={} max_cargo_weight={}",
            train_id,
            train.last_station(),
            train.max_cargo_weight()
        );
        self.trains.insert(train_id, train);
        Ok(train_id)
    }

    /// Registers an unassigned passenger.
    pub fn register_passenger(
        &mut self,
        name: impl Into<String>,
        cargo_weight: f64,
    ) -> ServiceResult<PassengerId> {
        let passenger = Passenger::new(name, cargo_weight)
            .map_err(|err| rejected("passenger_register", "passenger", err))?;
        let passenger_id = passenger.id();
        info!(
            "event=passenger_register module=passenger status=ok passenger_id={} cargo_weight={}",
            passenger_id,
            passenger.cargo_weight()
        );
        self.passengers.insert(passenger_id, passenger);
        Ok(passenger_id)
    }

    /// Opens a trip on `train_id` from `origin_city` to `destination_city`.
    pub fn open_trip(
        &mut self,
        origin_city: &str,
        destination_city: &str,
        train_id: TrainId,
    ) -> ServiceResult<TripId> {
        let train = self
            .trains
            .get_mut(&train_id)
            .ok_or(ServiceError::TrainNotFound(train_id))?;
        let trip = TrainTrip::new(origin_city, destination_city, train)
            .map_err(|err| rejected("trip_open", "trip", err))?;
        let trip_id = trip.id();
        info!(
            "event=trip_open module=trip status=ok trip_id={} train_id={} origin={} destination={}",
            trip_id,
            train_id,
            trip.origin_city(),
            trip.destination_city()
        );
        self.trips.insert(trip_id, trip);
        Ok(trip_id)
    }

    /// Boards `passenger_id` onto `trip_id`.
    pub fn join_trip(&mut self, passenger_id: PassengerId, trip_id: TripId) -> ServiceResult<()> {
        let passenger = self
            .passengers
            .get_mut(&passenger_id)
            .ok_or(ServiceError::PassengerNotFound(passenger_id))?;
        let trip = self
            .trips
            .get_mut(&trip_id)
            .ok_or(ServiceError::TripNotFound(trip_id))?;

        passenger
            .join_trip(trip)
            .map_err(|err| rejected("trip_join", "trip", err))?;
        info!(
            "event=trip_join module=trip status=ok trip_id={} passenger_id={} remaining_capacity={}",
            trip_id,
            passenger_id,
            trip.remaining_capacity()
        );
        Ok(())
    }

    /// Removes `passenger_id` from whatever trip it is on.
    ///
    /// Unassigned passengers are a no-op. Returns the trip that was left.
    pub fn leave_trip(&mut self, passenger_id: PassengerId) -> ServiceResult<Option<TripId>> {
        let passenger = self
            .passengers
            .get_mut(&passenger_id)
            .ok_or(ServiceError::PassengerNotFound(passenger_id))?;
        let Some(trip_id) = passenger.trip_id() else {
            return Ok(None);
        };
        let trip = self
            .trips
            .get_mut(&trip_id)
            .ok_or(ServiceError::TripNotFound(trip_id))?;

        passenger.leave_trip(trip);
        info!(
            "event=trip_leave module=trip status=ok trip_id={} passenger_id={} remaining_capacity={}",
            trip_id,
            passenger_id,
            trip.remaining_capacity()
        );
        Ok(Some(trip_id))
    }

    /// Closes `trip_id`: detaches every passenger and parks the train at the
    /// destination, available for a new trip.
    pub fn complete_trip(&mut self, trip_id: TripId) -> ServiceResult<TripCompletion> {
        let trip = self
            .trips
            .get_mut(&trip_id)
            .ok_or(ServiceError::TripNotFound(trip_id))?;
        let train_id = trip.train_id();
        if !self.trains.contains_key(&train_id) {
            return Err(ServiceError::TrainNotFound(train_id));
        }

        let detached_passengers = trip
            .complete()
            .map_err(|err| rejected("trip_complete", "trip", err))?;
        for passenger_id in &detached_passengers {
            if let Some(passenger) = self.passengers.get_mut(passenger_id) {
                passenger.assign_trip(None);
            }
        }
        if let Some(train) = self.trains.get_mut(&train_id) {
            train.finish_trip(trip.destination_city());
        }

        info!(
            "event=trip_complete module=trip status=ok trip_id={} train_id={} station={} detached={}",
            trip_id,
            train_id,
            trip.destination_city(),
            detached_passengers.len()
        );
        Ok(TripCompletion {
            trip_id,
            train_id,
            detached_passengers,
        })
    }

    /// Remaining cargo capacity of `trip_id`.
    pub fn remaining_capacity(&self, trip_id: TripId) -> ServiceResult<f64> {
        Ok(self.trip(trip_id)?.remaining_capacity())
    }

    /// Passengers of `trip_id` in boarding order.
    pub fn trip_passengers(&self, trip_id: TripId) -> ServiceResult<Vec<&Passenger>> {
        self.trip(trip_id)?
            .passenger_ids()
            .into_iter()
            .map(|passenger_id| self.passenger(passenger_id))
            .collect()
    }

    pub fn train(&self, train_id: TrainId) -> ServiceResult<&Train> {
        self.trains
            .get(&train_id)
            .ok_or(ServiceError::TrainNotFound(train_id))
    }

    pub fn trip(&self, trip_id: TripId) -> ServiceResult<&TrainTrip> {
        self.trips
            .get(&trip_id)
            .ok_or(ServiceError::TripNotFound(trip_id))
    }

    pub fn passenger(&self, passenger_id: PassengerId) -> ServiceResult<&Passenger> {
        self.passengers
            .get(&passenger_id)
            .ok_or(ServiceError::PassengerNotFound(passenger_id))
    }
}

fn rejected(event: &str, module: &str, err: RailwayError) -> ServiceError {
    warn!(
        "event={} module={} status=rejected error_code={} error={}",
        event,
        module,
        err.code(),
        err
    );
    ServiceError::Domain(err)
}
