//! Fixed-point cargo weight.
//!
//! # Responsibility
//! - Convert caller-facing kilogram values into whole grams.
//! - Keep every capacity comparison in exact integer arithmetic.
//!
//! # Invariants
//! - Inputs are rounded to the nearest gram once, at construction.
//! - Sums and differences never round: a trip that is full is exactly full.

use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

const GRAMS_PER_KG: f64 = 1000.0;

/// Non-negative weight stored as whole grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u64);

impl Weight {
    pub const ZERO: Weight = Weight(0);

    /// Converts kilograms to a weight.
    ///
    /// Returns `None` for negative, non-finite or out-of-range values.
    pub fn from_kg(kg: f64) -> Option<Self> {
        if !kg.is_finite() || kg < 0.0 {
            return None;
        }
        let grams = (kg * GRAMS_PER_KG).round();
        if grams >= u64::MAX as f64 {
            return None;
        }
        Some(Self(grams as u64))
    }

    pub fn from_grams(grams: u64) -> Self {
        Self(grams)
    }

    pub fn grams(self) -> u64 {
        self.0
    }

    pub fn as_kg(self) -> f64 {
        self.0 as f64 / GRAMS_PER_KG
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Weight) -> Option<Weight> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Weight) -> Weight {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Display for Weight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_kg())
    }
}

/// Serialized as kilograms to keep the wire shape unit-stable.
impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_kg())
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        Self(iter.map(|weight| weight.0).sum())
    }
}
