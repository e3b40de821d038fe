//! Total accessors over untyped claim structures
//!
//! A claim arrives as a parsed `serde_json::Value` whose shape the author
//! controls, not us. These helpers coerce a value to a target semantic type
//! without ever panicking or returning an error: absence and type mismatch
//! both degrade to an "absent" sentinel (`None`, empty slice, empty string,
//! `false`), which judges then surface as NO-EVAL or FAIL verdicts.

use serde_json::{Map, Value};

/// A parsed claim object: string keys, arbitrary JSON values.
pub type ClaimMap = Map<String, Value>;

/// Read a key from a claim mapping.
pub fn field<'a>(map: &'a ClaimMap, key: &str) -> Option<&'a Value> {
    map.get(key)
}

/// Coerce a value to a mapping.
///
/// Returns `Some` only when the value structurally is a JSON object;
/// absence and any other shape look identical to callers.
pub fn as_mapping(value: Option<&Value>) -> Option<&ClaimMap> {
    value.and_then(Value::as_object)
}

/// Coerce a value to an ordered sequence.
///
/// Anything that is not a JSON array becomes the empty slice.
pub fn as_list(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Coerce a value to a trimmed string.
///
/// Strings are trimmed; numbers and booleans use their display form;
/// null, absence, arrays and objects all become the empty string.
pub fn as_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Coerce a value to a number.
///
/// Accepts JSON numbers and strings that parse as `f64` after trimming.
/// `None` means "absent", not "error" — callers treat absence as a
/// validation failure at the judge level.
pub fn as_number(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Coerce a value to a boolean flag.
///
/// True for boolean `true`, non-zero numbers, and the strings `"true"`
/// (case-insensitive) or `"1"`. Everything else, including absence,
/// is false.
pub fn as_flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|x| x != 0.0),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            trimmed.eq_ignore_ascii_case("true") || trimmed == "1"
        }
        _ => false,
    }
}
