//! Serde pass-through for containers and values

use cover::{CoverArray, Error, Value};
use serde_json::json;

#[test]
fn test_json_text_round_trip() {
    let text = r#"{"user":{"name":"Alice","roles":["admin","editor"]},"count":2}"#;

    let cover = CoverArray::from_json_str(text).unwrap();
    assert_eq!(cover.get_path_as::<String>("user.roles.0"), Some("admin".to_string()));
    assert_eq!(cover.to_json_string().unwrap(), text);
}

#[test]
fn test_serialize_matches_to_raw() {
    let mut cover = CoverArray::new();
    cover.at("a").put("b", vec![1, 2]);
    cover.set("c", 1.5);

    let via_serde = serde_json::to_value(&cover).unwrap();
    assert_eq!(via_serde, cover.to_raw());
    assert_eq!(via_serde, json!({"a": {"b": [1, 2]}, "c": 1.5}));
}

#[test]
fn test_pretty_output_is_valid_json() {
    let cover = CoverArray::from_raw(json!({"a": [1]}));
    let pretty = cover.to_json_pretty().unwrap();

    assert!(pretty.contains('\n'));
    assert_eq!(CoverArray::from_json_str(&pretty).unwrap(), cover);
}

#[test]
fn test_value_deserializes_with_normalization() {
    let value: Value = serde_json::from_str(r#"{"x": [1, {"y": null}]}"#).unwrap();

    assert!(value.is_cover());
    let inner = value.get("x").and_then(|x| x.get(1usize)).unwrap();
    assert_eq!(inner.get("y"), Some(&Value::Null));
}

#[test]
fn test_codec_errors() {
    let err = CoverArray::from_json_str("[1, 2").unwrap_err();
    assert!(err.is_serialization_error());
    assert_eq!(err.module(), "serialize");

    let err = CoverArray::from_json_str("true").unwrap_err();
    assert!(err.is_not_a_container());
    assert!(!err.is_type_error());
    assert!(matches!(err, Error::Cover(_)));
}

#[test]
fn test_empty_sequences_serialize_as_arrays() {
    let text = r#"{"tags":[],"meta":{}}"#;
    let cover = CoverArray::from_json_str(text).unwrap();

    assert_eq!(cover.to_json_string().unwrap(), text);
    assert_eq!(serde_json::to_value(&cover).unwrap(), cover.to_raw());
}
