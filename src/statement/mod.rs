//! Statement construction - one pure builder per action kind.
//!
//! A statement is the fully built protocol document for one query plan,
//! immutable once built, plus the bookkeeping its decoder needs (projected
//! field order, recorded join order). [`build`] dispatches exhaustively on
//! the plan's action, so a new action kind cannot be forgotten here.

mod aggregate;
mod create;
mod find;
mod update;

pub use aggregate::AggregateStatement;
pub use create::CreateStatement;
pub use find::FindStatement;
pub use update::UpdateManyStatement;

use serde_json::{json, Value};

use crate::plan::{Action, CacheStrategy, QueryPlan};
use crate::protocol::{ProtocolError, Response, Row};
use crate::translate::{JsonMap, TranslateResult};

/// A fully built protocol statement.
///
/// Exactly two operations matter to the transport: [`serialize`] produces
/// the outgoing document, [`decode`] turns the round-trip's response into
/// ordered tuples. Both are pure; the transport owns the round-trip itself,
/// including any retry or cancellation policy.
///
/// [`serialize`]: Statement::serialize
/// [`decode`]: Statement::decode
pub trait Statement: std::fmt::Debug {
    /// The wire document: `{"modelName", "action", "query"}`.
    fn serialize(&self) -> Value;

    /// Classify response errors, then decode the result payload into tuples.
    fn decode(&self, response: &Response) -> Result<Vec<Row>, ProtocolError>;

    /// Freshness hint riding on this statement, for the transport to render
    /// into a channel-level caching hint. Never part of the document.
    fn cache_strategy(&self) -> Option<&CacheStrategy> {
        None
    }
}

/// Build the statement variant for the plan's action.
pub fn build(plan: QueryPlan) -> TranslateResult<Box<dyn Statement>> {
    match plan.action {
        Action::Find => Ok(Box::new(FindStatement::from_plan(plan)?)),
        Action::Create => Ok(Box::new(CreateStatement::from_plan(plan)?)),
        Action::UpdateMany => Ok(Box::new(UpdateManyStatement::from_plan(plan)?)),
        Action::Aggregate => Ok(Box::new(AggregateStatement::from_plan(plan)?)),
    }
}

/// Assemble the outgoing document shape shared by every statement.
pub(crate) fn wire_document(
    model: &str,
    action: Action,
    arguments: &JsonMap,
    selection: &JsonMap,
) -> Value {
    json!({
        "modelName": model,
        "action": action.wire_name(),
        "query": {
            "arguments": arguments,
            "selection": selection,
        },
    })
}

/// Selection requesting the entity's full default expansion. Field-level
/// narrowing happens at decode time, never on the wire.
pub(crate) fn full_object_selection() -> JsonMap {
    let mut selection = JsonMap::new();
    selection.insert("$scalars".to_string(), Value::Bool(true));
    selection.insert("$composites".to_string(), Value::Bool(true));
    selection
}
