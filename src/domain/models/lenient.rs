//! Lenient field decoders for server records.
//!
//! The backend stores whatever JSON it was sent, so a field may arrive with
//! an unexpected scalar type. These decoders coerce what they can and fall
//! back to "unknown" otherwise, so one odd field never fails a whole list.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Scalar as display text; `null`, arrays and objects read as unknown.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// JSON number or numeric string as a finite float.
fn scalar_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|number| number.is_finite())
}

pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// A list of tags. Non-scalar items are dropped; a bare string is one tag.
pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        Value::String(text) if !text.trim().is_empty() => vec![text],
        _ => Vec::new(),
    })
}

pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_number(&Value::deserialize(deserializer)?))
}

/// A head count; fractional values are truncated.
#[allow(clippy::cast_possible_truncation)]
pub fn optional_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if let Some(count) = value.as_i64() {
        return Ok(Some(count));
    }
    Ok(scalar_number(&value).map(|number| number.trunc() as i64))
}
