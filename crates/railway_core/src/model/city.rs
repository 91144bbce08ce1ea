//! City registry used to validate trip endpoints and train stations.
//!
//! # Responsibility
//! - Hold the fixed set of served cities, built once per process.
//! - Resolve user-provided names to one canonical `City`.
//!
//! # Invariants
//! - The registry is immutable after initialization.
//! - Lookup trims surrounding whitespace, collapses inner whitespace runs and
//!   ignores letter case; the canonical spelling is what gets stored.
//! - Two `City` values are equal iff they name the same registry entry.

use crate::error::{RailwayError, RailwayResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

const CITY_NAMES: &[&str] = &[
    "Arak",
    "Ardabil",
    "Urmia",
    "Isfahan",
    "Ahvaz",
    "Ilam",
    "Bojnord",
    "Bandar Abbas",
    "Bushehr",
    "Birjand",
    "Tabriz",
    "Tehran",
    "Khorramabad",
    "Rasht",
    "Zahedan",
    "Zanjan",
    "Sari",
    "Semnan",
    "Sanandaj",
    "Shahr-e Kord",
    "Shiraz",
    "Qazvin",
    "Qom",
    "Karaj",
    "Kermanshah",
    "Gorgan",
    "Mashhad",
    "Hamadan",
    "Yasuj",
    "Yazd",
];

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static REGISTRY: Lazy<CityRegistry> = Lazy::new(|| CityRegistry::from_names(CITY_NAMES));

/// Canonical, registry-validated city name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct City(&'static str);

impl City {
    /// Resolves `name` against the registry.
    ///
    /// # Errors
    /// - `RailwayError::InvalidCity` when the name is not served.
    pub fn parse(name: &str) -> RailwayResult<Self> {
        resolve_city(name).ok_or_else(|| RailwayError::InvalidCity(name.to_string()))
    }

    /// Canonical spelling, e.g. `Bandar Abbas`.
    pub fn name(self) -> &'static str {
        self.0
    }
}

impl Display for City {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl TryFrom<String> for City {
    type Error = RailwayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

impl<'de> Deserialize<'de> for City {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        City::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl From<City> for String {
    fn from(value: City) -> Self {
        value.0.to_string()
    }
}

/// Immutable lookup table of served cities.
pub struct CityRegistry {
    ordered: Vec<City>,
    by_key: HashMap<String, City>,
}

impl CityRegistry {
    /// Process-wide registry instance.
    pub fn global() -> &'static CityRegistry {
        &REGISTRY
    }

    fn from_names(names: &'static [&'static str]) -> Self {
        let ordered: Vec<City> = names.iter().copied().map(City).collect();
        let by_key = ordered
            .iter()
            .map(|city| (lookup_key(city.0), *city))
            .collect();
        Self { ordered, by_key }
    }

    /// Returns whether `name` resolves to a served city.
    pub fn is_valid_city(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Returns the canonical city for `name`, if served.
    pub fn resolve(&self, name: &str) -> Option<City> {
        self.by_key.get(lookup_key(name).as_str()).copied()
    }

    /// Served cities in registry order.
    pub fn cities(&self) -> &[City] {
        &self.ordered
    }

    /// Number of served cities.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Always `false` for the process-wide registry.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Returns whether `name` resolves to a served city.
pub fn is_valid_city(name: &str) -> bool {
    CityRegistry::global().is_valid_city(name)
}

/// Resolves `name` to its canonical city.
pub fn resolve_city(name: &str) -> Option<City> {
    CityRegistry::global().resolve(name)
}

/// Returns all served cities in registry order.
pub fn all_cities() -> &'static [City] {
    CityRegistry::global().cities()
}

fn lookup_key(name: &str) -> String {
    WHITESPACE_RE
        .replace_all(name.trim(), " ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{all_cities, is_valid_city, lookup_key, resolve_city, City, CityRegistry};
    use std::collections::HashSet;

    #[test]
    fn registry_holds_thirty_unique_cities() {
        let registry = CityRegistry::global();
        assert_eq!(registry.len(), 30);
        let keys: HashSet<String> = all_cities().iter().map(|c| lookup_key(c.name())).collect();
        assert_eq!(keys.len(), 30);
    }

    #[test]
    fn lookup_key_normalizes_case_and_whitespace() {
        assert_eq!(lookup_key("  Bandar \t  ABBAS "), "bandar abbas");
    }

    #[test]
    fn resolve_returns_canonical_spelling() {
        let city = resolve_city("shahr-e kord").expect("known city");
        assert_eq!(city.name(), "Shahr-e Kord");
        assert_eq!(city, City::parse("SHAHR-E KORD").expect("known city"));
    }

    #[test]
    fn unknown_and_blank_names_are_rejected() {
        assert!(!is_valid_city("Atlantis"));
        assert!(!is_valid_city(""));
        assert!(!is_valid_city("   "));
        assert!(!is_valid_city("Teh ran"));
    }
}
