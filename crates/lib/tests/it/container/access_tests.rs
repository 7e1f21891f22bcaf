//! Property-style and auto-vivifying access

use cover::{CoverArray, Key, Value};
use serde_json::json;

use crate::helpers::sample_user;

// ===== PROPERTY-STYLE ACCESS =====

#[test]
fn test_cover_basic_operations() {
    let mut cover = CoverArray::new();

    assert!(cover.is_empty());
    assert_eq!(cover.len(), 0);

    let old_val = cover.set("name", "Alice");
    assert!(old_val.is_none());
    assert_eq!(cover.len(), 1);

    cover.set("age", 30);
    assert_eq!(cover.len(), 2);

    assert!(cover.has("name"));
    assert!(cover.has("age"));
    assert!(!cover.has("nonexistent"));

    assert_eq!(cover.get_as::<String>("name"), Some("Alice".to_string()));
    assert_eq!(cover.get_as::<i64>("age"), Some(30));
    assert!(cover.get("nonexistent").is_none());
}

#[test]
fn test_cover_overwrite_keeps_position() {
    let mut cover = CoverArray::new();
    cover.set("first", 1);
    cover.set("second", 2);

    let old_val = cover.set("first", "replaced");
    assert_eq!(old_val, Some(Value::Int(1)));

    let keys: Vec<_> = cover.keys().cloned().collect();
    assert_eq!(keys, vec![Key::from("first"), Key::from("second")]);
    assert_eq!(cover.len(), 2);
}

#[test]
fn test_get_on_missing_key_does_not_mutate() {
    let cover = sample_user();
    let before = cover.len();

    assert!(cover.get("missing").is_none());
    assert!(cover.get(7usize).is_none());
    assert_eq!(cover.len(), before);
    assert!(!cover.has("missing"));
}

#[test]
fn test_delete_and_unset() {
    let mut cover = sample_user();

    let removed = cover.delete("active");
    assert_eq!(removed, Some(Value::Bool(true)));
    assert!(!cover.has("active"));

    // Missing keys are a no-op
    assert!(cover.delete("active").is_none());
    assert!(cover.unset("nonexistent").is_none());
    assert_eq!(cover.len(), 1);
}

#[test]
fn test_has_reports_presence_of_null() {
    let mut cover = CoverArray::new();
    cover.set("nothing", Value::Null);

    assert!(cover.has("nothing"));
    assert!(cover.exists("nothing"));
    assert_eq!(cover.get("nothing"), Some(&Value::Null));
}

#[test]
fn test_get_as_type_mismatch_is_none() {
    let cover = sample_user();

    assert_eq!(cover.get_as::<bool>("active"), Some(true));
    assert_eq!(cover.get_as::<i64>("active"), None);
    assert_eq!(cover.get_as::<&str>("missing"), None);

    let user = cover.get_as::<CoverArray>("user").unwrap();
    assert_eq!(user.get_as::<&str>("name"), Some("Alice"));
    assert_eq!(user.get_as::<f64>("age"), Some(30.0));
}

// ===== NORMALIZATION =====

#[test]
fn test_set_normalizes_nested_raw_data() {
    let mut cover = CoverArray::new();
    cover.set("x", json!({"y": {"z": 1}}));

    let x = cover.get("x").unwrap();
    assert!(x.is_cover());
    let y = x.get("y").unwrap();
    assert!(y.is_cover());
    assert_eq!(y.get("z"), Some(&Value::Int(1)));
}

#[test]
fn test_set_normalizes_rust_sequences() {
    let mut cover = CoverArray::new();
    cover.set("tags", vec!["a", "b"]);

    let tags = cover.get("tags").and_then(Value::as_cover).unwrap();
    assert!(tags.is_sequence());
    assert_eq!(tags.item(1), Some(&Value::from("b")));
}

#[test]
fn test_option_values_become_null() {
    let mut cover = CoverArray::new();
    cover.set("some", Some(5));
    cover.set("none", None::<i64>);

    assert_eq!(cover.get("some"), Some(&Value::Int(5)));
    assert_eq!(cover.get("none"), Some(&Value::Null));
}

// ===== AUTO-VIVIFYING ACCESS =====

#[test]
fn test_at_creates_and_stores_empty_container() {
    let mut cover = CoverArray::new();

    assert!(cover.at("fresh").is_empty_cover());
    assert!(cover.has("fresh"));
    assert_eq!(cover.len(), 1);
}

#[test]
fn test_at_twice_returns_same_container() {
    let mut cover = CoverArray::new();

    let first: *const Value = cover.at("k");
    let second: *const Value = cover.at("k");
    assert_eq!(first, second);
    assert_eq!(cover.len(), 1);
}

#[test]
fn test_at_returns_present_scalar_as_is() {
    let mut cover = sample_user();

    assert_eq!(cover.at("active"), &Value::Bool(true));
    // Chaining into a scalar creates nothing
    assert_eq!(cover.at("active").at("deeper"), &Value::Bool(true));
    assert_eq!(cover.get("active"), Some(&Value::Bool(true)));
}

#[test]
fn test_chained_writes_vivify_intermediate_levels() {
    let mut cover = CoverArray::new();
    cover.at("settings").at("theme").put("dark", true).put("size", 12);

    assert_eq!(cover.get_path_as::<bool>("settings.theme.dark"), Some(true));
    assert_eq!(cover.get_path_as::<i64>("settings.theme.size"), Some(12));
}

#[test]
fn test_at_through_null_vivifies() {
    let mut cover = CoverArray::new();
    cover.set("slot", Value::Null);

    cover.at("slot").put("inner", 1);
    assert_eq!(cover.get_path_as::<i64>("slot.inner"), Some(1));
}

#[test]
fn test_get_mut_edits_in_place() {
    let mut cover = sample_user();

    if let Some(Value::Cover(user)) = cover.get_mut("user") {
        user.set("name", "Bob");
    }
    assert_eq!(cover.get_path_as::<String>("user.name"), Some("Bob".to_string()));
}

// ===== BULK DATA =====

#[test]
fn test_replace_data_is_a_shallow_merge() {
    let mut cover = sample_user();
    cover.replace_data([("active", Value::Bool(false)), ("extra", Value::from("new"))]);

    assert_eq!(cover.get("active"), Some(&Value::Bool(false)));
    assert_eq!(cover.get("extra"), Some(&Value::from("new")));
    // Untouched keys survive
    assert!(cover.has("user"));
}

#[test]
fn test_clear_removes_everything() {
    let mut cover = sample_user();
    cover.clear();

    assert!(cover.is_empty());
    assert!(cover.get("user").is_none());
}

#[test]
fn test_iteration_follows_insertion_order() {
    let cover: CoverArray = [("z", 1), ("a", 2), ("m", 3)].into_iter().collect();

    let keys: Vec<String> = cover.keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);

    let total: i64 = cover.values().filter_map(Value::as_int).sum();
    assert_eq!(total, 6);

    let owned: Vec<(Key, Value)> = cover.into_iter().collect();
    assert_eq!(owned[0], (Key::from("z"), Value::Int(1)));
}
