//! Loading the input document and parsing value arguments.

use std::{
    io::Read,
    path::Path,
};

use cover::{CoverArray, Value};

/// Reads the document from `input`, or from stdin when no file is given.
///
/// Blank input is an empty document so writes can start from nothing.
pub fn load(input: Option<&Path>) -> Result<CoverArray, Box<dyn std::error::Error>> {
    let text = match input {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Reading document");
            std::fs::read_to_string(path)?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if text.trim().is_empty() {
        return Ok(CoverArray::new());
    }
    Ok(CoverArray::from_json_str(&text)?)
}

/// Parses a value argument as JSON, falling back to a plain string
pub fn parse_value(raw: &str) -> Value {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => Value::from(json),
        Err(err) => {
            tracing::debug!(%err, "Value is not JSON, storing as text");
            Value::from(raw)
        }
    }
}
