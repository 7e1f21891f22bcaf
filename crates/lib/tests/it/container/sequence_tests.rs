//! Sequence operations: append, prepend, first, last, reversed

use cover::{CoverArray, Key, Value};
use serde_json::json;

fn int_values(cover: &CoverArray) -> Vec<i64> {
    cover.values().filter_map(Value::as_int).collect()
}

#[test]
fn test_append_then_prepend_ordering() {
    let mut list = CoverArray::new();
    list.append(1);
    list.append(2);
    list.prepend(0);

    assert_eq!(int_values(&list), vec![0, 1, 2]);
    assert!(list.is_sequence());
    assert_eq!(list.to_raw(), json!([0, 1, 2]));
}

#[test]
fn test_append_normalizes_nested_values() {
    let mut list = CoverArray::new();
    list.append(json!({"id": 1})).append(json!([true]));

    assert!(list.item(0).unwrap().is_cover());
    assert_eq!(list.item(1).and_then(|v| v.get(0usize)), Some(&Value::Bool(true)));
}

#[test]
fn test_append_after_sparse_keys() {
    let mut list = CoverArray::new();
    list.set(3usize, "three");
    list.set("label", "named");
    list.append("four");

    assert_eq!(list.item(4), Some(&Value::from("four")));
    assert_eq!(list.last(), Some(&Value::from("four")));
}

#[test]
fn test_delete_does_not_renumber() {
    let mut list = CoverArray::from_raw(json!(["a", "b", "c"]));
    list.delete(0usize);

    assert!(list.item(0).is_none());
    assert_eq!(list.item(1), Some(&Value::from("b")));
    assert!(!list.is_sequence());
    assert_eq!(list.to_raw(), json!({"1": "b", "2": "c"}));

    // The next append still goes after the largest key
    list.append("d");
    assert_eq!(list.item(3), Some(&Value::from("d")));
}

#[test]
fn test_prepend_keeps_string_keys() {
    let mut cover = CoverArray::from_raw(json!({"title": "t"}));
    cover.prepend("head");

    assert_eq!(cover.first(), Some(&Value::from("head")));
    assert_eq!(cover.get("title"), Some(&Value::from("t")));
    assert_eq!(
        cover.keys().cloned().collect::<Vec<_>>(),
        vec![Key::Index(0), Key::from("title")]
    );
}

#[test]
fn test_first_and_last_on_empty() {
    let list = CoverArray::new();
    assert!(list.first().is_none());
    assert!(list.last().is_none());
}

#[test]
fn test_first_and_last_follow_insertion_order() {
    let mut cover = CoverArray::new();
    cover.set("b", 2);
    cover.set("a", 1);

    assert_eq!(cover.first(), Some(&Value::Int(2)));
    assert_eq!(cover.last(), Some(&Value::Int(1)));
}

#[test]
fn test_reversed_renumbers_indexes() {
    let list = CoverArray::from_raw(json!([1, 2, 3]));
    let reversed = list.reversed();

    assert_eq!(int_values(&reversed), vec![3, 2, 1]);
    assert!(reversed.is_sequence());
    assert_eq!(reversed.item(0), Some(&Value::Int(3)));

    // The original is untouched
    assert_eq!(int_values(&list), vec![1, 2, 3]);
}

#[test]
fn test_append_after_largest_index_is_skipped() {
    let mut list = CoverArray::new();
    assert!(list.set_path("18446744073709551615", 1));
    assert_eq!(list.keys().next(), Some(&Key::Index(usize::MAX)));

    list.append(2).append(3);

    assert_eq!(list.len(), 1);
    assert_eq!(list.item(usize::MAX), Some(&Value::Int(1)));
    assert!(list.item(0).is_none());
}

#[test]
fn test_first_append_marks_an_empty_container_as_sequence() {
    let mut cover = CoverArray::new();
    cover.append("only");
    cover.delete(0usize);

    assert_eq!(cover.to_raw(), json!([]));
}
