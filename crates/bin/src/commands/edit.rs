//! Commands that modify the document: set and append.

use cover::{CoverArray, Path, Value};

use crate::cli::WriteArgs;
use crate::document::parse_value;
use crate::output::{OutputFormat, render_document};

/// Run the set command, printing the updated document
pub fn set(
    mut doc: CoverArray,
    args: &WriteArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    apply_set(&mut doc, &args.path, parse_value(&args.value))?;
    println!("{}", render_document(&doc, format)?);
    Ok(())
}

/// Run the append command, printing the updated document
pub fn append(
    mut doc: CoverArray,
    args: &WriteArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    apply_append(&mut doc, &args.path, parse_value(&args.value))?;
    println!("{}", render_document(&doc, format)?);
    Ok(())
}

fn apply_set(
    doc: &mut CoverArray,
    path: &str,
    value: Value,
) -> Result<(), Box<dyn std::error::Error>> {
    if Path::new(path).is_empty() {
        return Err("set needs a non-empty path".into());
    }
    if !doc.set_path(path, value) {
        return Err(format!("cannot write {path}: the path runs through a scalar").into());
    }
    tracing::info!(path, "Value written");
    Ok(())
}

/// Appends to the container at `path`; an empty path appends to the root
fn apply_append(
    doc: &mut CoverArray,
    path: &str,
    value: Value,
) -> Result<(), Box<dyn std::error::Error>> {
    let target = if Path::new(path).is_empty() {
        doc
    } else {
        let slot = doc.at_path(path).ok_or("empty path")?;
        if slot.is_null() {
            *slot = Value::empty_cover();
        }
        let found = slot.type_name();
        slot.as_cover_mut()
            .ok_or_else(|| format!("cannot append to {path}: found {found}"))?
    };
    target.append(value);
    tracing::info!(path, len = target.len(), "Value appended");
    Ok(())
}
