//! Core use-case services.
//!
//! # Responsibility
//! - Resolve entities by id and drive model operations for callers.
//! - Keep CLI/host layers decoupled from ownership of model objects.

pub mod railway_service;
