//! Decoding of result payloads into ordered value tuples.
//!
//! A tuple carries the projected fields in plan order, then each join's
//! related values appended in join-declaration order, each related map read
//! in its own iteration order. Narrowing to the projected fields happens
//! here, not on the wire - statements always request the full object.

use serde_json::Value;

use super::ProtocolError;
use crate::plan::Action;
use crate::translate::JsonMap;

/// One decoded result tuple.
pub type Row = Vec<Value>;

/// The composite key a result payload lives under: action name + entity
/// name, e.g. `findManyUser`.
pub fn result_key(action: Action, entity: &str) -> String {
    format!("{}{}", action.wire_name(), entity)
}

/// Expect a JSON object, in a named position.
pub(crate) fn result_object<'a>(
    value: &'a Value,
    context: &str,
) -> Result<&'a JsonMap, ProtocolError> {
    value
        .as_object()
        .ok_or_else(|| ProtocolError::DecodeShape(format!("{context} is not an object")))
}

/// Build one tuple from a result object: projected fields in order, then
/// each join's related map values in that map's iteration order.
pub(crate) fn tuple_from_object(
    object: &JsonMap,
    fields: &[String],
    joins: &[String],
) -> Result<Row, ProtocolError> {
    let mut row = Vec::with_capacity(fields.len());
    for field in fields {
        let value = object.get(field).ok_or_else(|| {
            ProtocolError::DecodeShape(format!("result object is missing field '{field}'"))
        })?;
        row.push(value.clone());
    }
    for join in joins {
        let related = object.get(join).ok_or_else(|| {
            ProtocolError::DecodeShape(format!("result object is missing join '{join}'"))
        })?;
        let related = result_object(related, &format!("join '{join}'"))?;
        row.extend(related.values().cloned());
    }
    Ok(row)
}

/// Pull the reported mutation count out of an `updateMany` result.
pub(crate) fn mutation_count(value: &Value) -> Result<Value, ProtocolError> {
    let object = result_object(value, "updateMany result")?;
    object
        .get("count")
        .cloned()
        .ok_or_else(|| ProtocolError::DecodeShape("updateMany result has no 'count'".to_string()))
}

/// Unwrap one level of an aggregate envelope and return its scalar.
///
/// Exactly one aggregate per statement is supported, so the envelope must
/// hold exactly one alias, and that alias exactly one sub-value.
pub(crate) fn aggregate_scalar(value: &Value) -> Result<Value, ProtocolError> {
    let envelope = result_object(value, "aggregate result")?;
    if envelope.len() != 1 {
        return Err(ProtocolError::DecodeShape(format!(
            "expected exactly one aggregate value, got {}",
            envelope.len()
        )));
    }
    // len() == 1 was just checked
    let (alias, inner) = envelope.iter().next().ok_or_else(|| {
        ProtocolError::DecodeShape("expected exactly one aggregate value, got 0".to_string())
    })?;
    let inner = result_object(inner, &format!("aggregate envelope '{alias}'"))?;
    if inner.len() != 1 {
        return Err(ProtocolError::DecodeShape(format!(
            "aggregate envelope '{alias}' holds {} values, expected 1",
            inner.len()
        )));
    }
    Ok(inner
        .values()
        .next()
        .cloned()
        .unwrap_or(Value::Null))
}
