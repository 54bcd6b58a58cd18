//! Wire normalization of scalar leaf values.
//!
//! The only active fixup is for timestamps: the protocol rejects numeric UTC
//! offsets, so the offset is dropped from the RFC 3339 text and a literal
//! lowercase `"z"` is appended. This is a lossy compatibility shim, not a
//! timezone conversion - a non-UTC instant loses its offset silently.

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use crate::plan::ScalarValue;

/// Convert a scalar value into its wire representation.
pub fn normalize(value: &ScalarValue) -> Value {
    match value {
        ScalarValue::Null => Value::Null,
        ScalarValue::Bool(b) => Value::Bool(*b),
        ScalarValue::Int(i) => Value::from(*i),
        ScalarValue::Float(f) => Value::from(*f),
        ScalarValue::String(s) => Value::String(s.clone()),
        ScalarValue::DateTime(dt) => Value::String(timestamp_to_wire(dt)),
    }
}

/// RFC 3339 text truncated at the numeric offset marker, `"z"` appended.
fn timestamp_to_wire(dt: &DateTime<FixedOffset>) -> String {
    let text = dt.to_rfc3339();
    // The date part also contains '-', so only look past the time separator.
    let cut = match text.find('T') {
        Some(t) => text[t..].find(['+', '-']).map_or(text.len(), |i| t + i),
        None => text.len(),
    };
    let mut wire = text[..cut].to_string();
    wire.push('z');
    wire
}
