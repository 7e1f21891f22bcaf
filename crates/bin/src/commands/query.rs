//! Read-only commands: get, keys and count.

use std::borrow::Cow;

use cover::{CoverArray, Path, Value};

use crate::cli::{GetArgs, TargetArgs};
use crate::output::{OutputFormat, format_table, render_value};

/// Run the get command
pub fn get(
    doc: &CoverArray,
    args: &GetArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match doc.get_path(args.path.as_str()) {
        Some(value) => println!("{}", render_value(&value, format)?),
        None => {
            tracing::debug!(path = %args.path, "No value at path");
            if format == OutputFormat::Json {
                println!("null");
            }
        }
    }
    Ok(())
}

/// Run the keys command
pub fn keys(
    doc: &CoverArray,
    args: &TargetArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let target = resolve(doc, args.path.as_deref());

    match format {
        OutputFormat::Human => {
            let rows: Vec<Vec<String>> = target
                .iter()
                .map(|(key, value)| vec![key.to_string(), value.type_name().to_string()])
                .collect();
            let table = format_table(&["KEY", "TYPE"], &rows);
            if !table.is_empty() {
                println!("{table}");
            }
        }
        OutputFormat::Json => {
            let keys: Vec<String> = target.keys().map(ToString::to_string).collect();
            println!("{}", serde_json::to_string(&keys)?);
        }
    }
    Ok(())
}

/// Run the count command
pub fn count(
    doc: &CoverArray,
    args: &TargetArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let len = resolve(doc, args.path.as_deref()).len();

    match format {
        OutputFormat::Human => println!("{len}"),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&serde_json::json!({ "count": len }))?)
        }
    }
    Ok(())
}

/// Finds the container a command operates on.
///
/// No path means the document itself. Paths that miss or end at a scalar
/// resolve to an empty container.
fn resolve<'a>(doc: &'a CoverArray, path: Option<&str>) -> Cow<'a, CoverArray> {
    let Some(path) = path.filter(|p| !Path::new(p).is_empty()) else {
        return Cow::Borrowed(doc);
    };
    match doc.get_path(path) {
        Some(Cow::Borrowed(Value::Cover(cover))) => Cow::Borrowed(cover),
        Some(Cow::Owned(Value::Cover(cover))) => Cow::Owned(cover),
        _ => Cow::Owned(CoverArray::new()),
    }
}
