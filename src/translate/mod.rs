//! Translation of plan fragments into wire-document fragments.
//!
//! Two pieces live here: the where-clause translator (predicate tree into a
//! nested condition mapping) and the join expander (selection entries plus
//! the join order the decoder replays). Both are pure; neither performs I/O.

mod normalize;

pub use normalize::normalize;

use serde_json::{json, Value};
use thiserror::Error;

use crate::plan::{JoinSpec, Predicate};

/// Result type for translation.
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Errors raised while building a statement from a query plan.
///
/// All of these are caller mistakes; nothing here is retriable.
#[derive(Error, Debug, PartialEq)]
pub enum TranslateError {
    /// Predicate shape the wire format cannot express.
    #[error("unsupported predicate: {0}")]
    UnsupportedPredicate(String),

    /// Aggregate kind other than a wildcard row count.
    #[error("unsupported aggregate '{alias}': only count(*) can be encoded")]
    UnsupportedAggregate { alias: String },

    /// `createOne` carries exactly one value row.
    #[error("create supports exactly one value row, got {rows}")]
    MultiRowCreate { rows: usize },
}

/// A JSON object with insertion-ordered keys.
pub type JsonMap = serde_json::Map<String, Value>;

// ============================================================================
// Where-clause translation
// ============================================================================

/// Translate a predicate tree into the wire's nested condition mapping.
///
/// `Eq(f, v)` becomes `{f: v}`, `In(f, vs)` becomes `{f: {"in": [vs...]}}`
/// (order-preserving), `Gt(f, v)` becomes `{f: {"gt": v}}`, and a
/// conjunction is the left-to-right union of its children's mappings.
///
/// When two conjunction children target the same field, the later one
/// overwrites the earlier one; two bounds on one column do not compose into
/// a range. Known limitation of the wire mapping.
///
/// Fails on anything but a flat AND of leaves, returning no partial mapping.
pub fn where_clause(predicate: &Predicate) -> TranslateResult<JsonMap> {
    let mut conditions = JsonMap::new();
    match predicate {
        Predicate::And(children) => {
            for child in children {
                let (field, condition) = leaf_condition(child)?;
                conditions.insert(field, condition);
            }
        }
        leaf => {
            let (field, condition) = leaf_condition(leaf)?;
            conditions.insert(field, condition);
        }
    }
    Ok(conditions)
}

fn leaf_condition(predicate: &Predicate) -> TranslateResult<(String, Value)> {
    match predicate {
        Predicate::Eq { field, value } => Ok((field.clone(), normalize(value))),
        Predicate::In { field, values } => {
            let members: Vec<Value> = values.iter().map(normalize).collect();
            Ok((field.clone(), json!({ "in": members })))
        }
        Predicate::Gt { field, value } => Ok((field.clone(), json!({ "gt": normalize(value) }))),
        Predicate::And(_) => Err(TranslateError::UnsupportedPredicate(
            "nested conjunction; only a flat AND of leaves is supported".to_string(),
        )),
    }
}

// ============================================================================
// Join expansion
// ============================================================================

/// Add one boolean selection entry per join, requesting the related entity's
/// full default-ordered expansion (all scalar and composite fields,
/// recursively - no sort, filter, or pagination pushdown).
///
/// Returns the join field names in declaration order; the decoder replays
/// this order exactly when appending related values to each tuple.
pub fn expand_joins(selection: &mut JsonMap, joins: &[JoinSpec]) -> Vec<String> {
    let mut order = Vec::with_capacity(joins.len());
    for join in joins {
        selection.insert(join.field.clone(), Value::Bool(true));
        order.push(join.field.clone());
    }
    order
}
