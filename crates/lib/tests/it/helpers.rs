//! Shared fixtures for the integration tests.

use cover::CoverArray;
use serde_json::json;

/// A small user document with a nested map and a sequence
pub fn sample_user() -> CoverArray {
    CoverArray::from_raw(json!({
        "user": {
            "name": "Alice",
            "age": 30,
            "roles": ["admin", "editor"],
        },
        "active": true,
    }))
}

/// The three-level document used by the path scenarios
pub fn abc_document() -> CoverArray {
    CoverArray::from_raw(json!({"a": {"b": {"c": true}}}))
}
