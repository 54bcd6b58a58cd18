//! Scalar leaf values carried by predicates and write payloads.

use chrono::{DateTime, FixedOffset};

/// A scalar value as the caller holds it, before wire normalization.
///
/// Every variant must be handled in `translate::normalize` - the compiler
/// enforces this.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Timestamps need normalization before they can cross the wire; the
    /// protocol rejects numeric UTC offsets.
    DateTime(DateTime<FixedOffset>),
}

impl From<bool> for ScalarValue {
    fn from(v: bool) -> Self {
        ScalarValue::Bool(v)
    }
}

impl From<i32> for ScalarValue {
    fn from(v: i32) -> Self {
        ScalarValue::Int(v as i64)
    }
}

impl From<i64> for ScalarValue {
    fn from(v: i64) -> Self {
        ScalarValue::Int(v)
    }
}

impl From<f64> for ScalarValue {
    fn from(v: f64) -> Self {
        ScalarValue::Float(v)
    }
}

impl From<&str> for ScalarValue {
    fn from(v: &str) -> Self {
        ScalarValue::String(v.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(v: String) -> Self {
        ScalarValue::String(v)
    }
}

impl From<DateTime<FixedOffset>> for ScalarValue {
    fn from(v: DateTime<FixedOffset>) -> Self {
        ScalarValue::DateTime(v)
    }
}

impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(ScalarValue::Null, Into::into)
    }
}
