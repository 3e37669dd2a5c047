//! Locating and parsing the JSON region of a free-form model reply.

use regex::Regex;
use serde_json::Value;

use crate::error::StructurerError;

/// Pulls the first top-level JSON array or object out of `raw` and parses it.
///
/// Models wrap their output in commentary often enough that this takes the
/// first `[`-to-last-`]` (or `{`-to-last-`}`) region and discards everything
/// around it. Ambiguity between multiple bracketed regions is resolved
/// greedily, matching the behavior callers already depend on.
///
/// # Errors
///
/// Returns [`StructurerError::Extraction`] when no JSON-shaped region exists
/// or the region fails to parse.
pub fn extract_json(raw: &str) -> Result<Value, StructurerError> {
    let re = Regex::new(r"(?s)(\[.*\]|\{.*\})").expect("valid json region regex");
    let region = re
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| {
            StructurerError::Extraction("no JSON found in model response".to_string())
        })?;

    serde_json::from_str(region.as_str()).map_err(|e| {
        StructurerError::Extraction(format!("JSON region failed to parse: {e}"))
    })
}

/// Requires the extracted value to be a non-empty array of records.
///
/// # Errors
///
/// Returns [`StructurerError::Extraction`] for non-arrays and empty arrays.
pub fn require_records(value: Value) -> Result<Vec<Value>, StructurerError> {
    match value {
        Value::Array(items) if !items.is_empty() => Ok(items),
        Value::Array(_) => Err(StructurerError::Extraction(
            "model returned an empty JSON array".to_string(),
        )),
        other => Err(StructurerError::Extraction(format!(
            "expected a non-empty JSON array of season records, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
