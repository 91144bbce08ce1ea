use railway_core::{all_cities, is_valid_city, resolve_city, City, RailwayError};

#[test]
fn every_registry_city_is_valid_by_its_canonical_name() {
    for city in all_cities() {
        assert!(is_valid_city(city.name()), "{city} should be valid");
        assert_eq!(resolve_city(city.name()), Some(*city));
    }
}

#[test]
fn lookup_ignores_case_and_extra_whitespace() {
    let bandar = resolve_city("  bandar   ABBAS ").unwrap();
    assert_eq!(bandar.name(), "Bandar Abbas");
    assert!(is_valid_city("tehran"));
    assert!(is_valid_city("TEHRAN"));
}

#[test]
fn unknown_city_parse_reports_the_input() {
    let err = City::parse("Paris").unwrap_err();
    assert_eq!(err, RailwayError::InvalidCity("Paris".to_string()));
}

#[test]
fn city_serializes_as_canonical_name() {
    let city = City::parse("shiraz").unwrap();
    let json = serde_json::to_value(city).unwrap();
    assert_eq!(json, "Shiraz");

    let decoded: City = serde_json::from_value(serde_json::json!("  YAZD ")).unwrap();
    assert_eq!(decoded.name(), "Yazd");
}

#[test]
fn deserialize_rejects_unknown_city() {
    let err = serde_json::from_value::<City>(serde_json::json!("Atlantis")).unwrap_err();
    assert!(
        err.to_string().contains("not a verified city: `Atlantis`"),
        "unexpected error: {err}"
    );
}
