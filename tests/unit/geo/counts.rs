use super::*;
use serde_json::json;

#[test]
fn missing_ids_read_as_zero() {
    let mut counts = AreaCounts::new();
    counts.insert("a", 12.0).unwrap();
    assert_eq!(counts.get("a"), 12.0);
    assert_eq!(counts.get("b"), 0.0);
    assert_eq!(counts.count_of(None), 0.0);
    assert_eq!(counts.count_of(Some("a")), 12.0);
}

#[test]
fn rejects_negative_and_non_finite_counts() {
    let mut counts = AreaCounts::new();
    assert!(counts.insert("a", -1.0).is_err());
    assert!(counts.insert("a", f64::NAN).is_err());
    assert!(counts.insert("a", f64::INFINITY).is_err());
    assert!(counts.is_empty());
}

#[test]
fn deserializes_from_json_object() {
    let counts: AreaCounts = serde_json::from_value(json!({"a": 3, "b": 7.5})).unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts.max(), Some(7.5));

    assert!(serde_json::from_value::<AreaCounts>(json!({"a": -3})).is_err());
}

#[test]
fn from_iter_drops_invalid_entries() {
    let counts: AreaCounts = [("a", 1.0), ("b", -2.0)].into_iter().collect();
    assert_eq!(counts.len(), 1);
    assert_eq!(counts.max(), Some(1.0));
    assert_eq!(AreaCounts::new().max(), None);
}
