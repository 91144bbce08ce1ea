//! Railway domain model.
//!
//! # Responsibility
//! - Define trains, trips, passengers and the served city set.
//! - Enforce every capacity and routing invariant at the type boundary.
//!
//! # Invariants
//! - Every entity is identified by a stable uuid v4.
//! - Cross-entity links are ids, never owning references.
//! - A failed operation leaves every involved object unchanged.

pub mod city;
pub mod passenger;
pub mod train;
pub mod trip;
pub mod weight;
