//! Conversion between containers and raw nested data

use cover::{CoverArray, Value};
use serde_json::json;

#[test]
fn test_raw_round_trip() {
    let raw = json!({
        "name": "Alice",
        "scores": [1, 2.5, null],
        "nested": {"deep": {"flag": false}},
        "tags": ["a"],
    });

    let cover = CoverArray::from_raw(raw.clone());
    assert_eq!(cover.to_raw(), raw);
}

#[test]
fn test_top_level_sequence_round_trip() {
    let raw = json!([{"id": 1}, {"id": 2}]);
    let cover = CoverArray::from_raw(raw.clone());

    assert!(cover.is_sequence());
    assert_eq!(cover.to_raw(), raw);
}

#[test]
fn test_empty_sequences_round_trip() {
    let raw = json!({"list": [], "name": "x", "nested": {"tags": []}});
    let cover = CoverArray::from_raw(raw.clone());

    assert!(cover.get("list").unwrap().is_empty_cover());
    assert_eq!(cover.to_raw(), raw);
    assert_eq!(CoverArray::from_raw(json!([])).to_raw(), json!([]));
}

#[test]
fn test_empty_maps_export_as_objects() {
    let mut cover = CoverArray::new();
    cover.at("vivified");

    assert_eq!(cover.to_raw(), json!({"vivified": {}}));
    assert_eq!(CoverArray::new().to_raw(), json!({}));
    assert_eq!(CoverArray::from_raw(json!({"m": {}})).to_raw(), json!({"m": {}}));
}

#[test]
fn test_emptied_sequence_keeps_its_shape() {
    let mut cover = CoverArray::from_raw(json!({"list": [1, 2]}));
    if let Some(Value::Cover(list)) = cover.get_mut("list") {
        list.delete(0usize);
        list.delete(1usize);
    }
    assert_eq!(cover.to_raw(), json!({"list": []}));
}

#[test]
fn test_raw_scalars_are_not_containers() {
    assert!(CoverArray::from_raw(json!(42)).is_empty());
    assert!(CoverArray::from_raw(json!(null)).is_empty());

    let err = CoverArray::try_from_raw(json!("text")).unwrap_err();
    assert!(err.is_not_a_container());
    assert_eq!(err.to_string(), "expected a map or sequence, found string");
}

#[test]
fn test_object_keys_stay_names() {
    let cover = CoverArray::from_raw(json!({"0": "zero", "1": "one"}));

    // Numeric-looking object keys are names, not indexes
    assert!(cover.item(0).is_none());
    assert_eq!(cover.get("0"), Some(&Value::from("zero")));
    assert!(!cover.is_sequence());
    assert_eq!(cover.to_raw(), json!({"0": "zero", "1": "one"}));
}

#[test]
fn test_object_order_is_preserved() {
    let cover = CoverArray::from_raw(json!({"z": 1, "a": 2, "m": 3}));
    let keys: Vec<String> = cover.keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_data_exposes_backing_map() {
    let cover = CoverArray::from_raw(json!({"a": 1}));
    let data = cover.data();

    assert_eq!(data.len(), 1);
    assert_eq!(data.get_index(0).map(|(_, v)| v), Some(&Value::Int(1)));
}

#[test]
fn test_raw_conversion_via_from() {
    let cover: CoverArray = json!({"a": {"b": 1}}).into();
    assert_eq!(cover.get_path_as::<i64>("a.b"), Some(1));
}
