//! `aggregate` statement.

use serde_json::{json, Value};

use super::{wire_document, Statement};
use crate::plan::{Action, AggregateSpec, QueryPlan};
use crate::protocol::{aggregate_scalar, result_key, ProtocolError, Response, Row};
use crate::translate::{where_clause, JsonMap, TranslateError, TranslateResult};

/// A count-style aggregate over one entity.
///
/// Only wildcard row counts can be encoded; the requested alias is
/// normalized to the wire's `_count` key.
#[derive(Debug, Clone)]
pub struct AggregateStatement {
    entity: String,
    arguments: JsonMap,
    selection: JsonMap,
}

impl AggregateStatement {
    pub(crate) fn from_plan(plan: QueryPlan) -> TranslateResult<Self> {
        let conditions = match &plan.predicate {
            Some(predicate) => where_clause(predicate)?,
            None => JsonMap::new(),
        };
        let mut arguments = JsonMap::new();
        arguments.insert("where".to_string(), Value::Object(conditions));

        let mut selection = JsonMap::new();
        for (alias, spec) in &plan.aggregates {
            match spec {
                AggregateSpec::CountAll => {
                    selection.insert(
                        "_count".to_string(),
                        json!({ "arguments": {}, "selection": { "_all": true } }),
                    );
                }
                _ => {
                    return Err(TranslateError::UnsupportedAggregate {
                        alias: alias.clone(),
                    })
                }
            }
        }

        Ok(Self {
            entity: plan.entity,
            arguments,
            selection,
        })
    }
}

impl Statement for AggregateStatement {
    fn serialize(&self) -> Value {
        wire_document(
            &self.entity,
            Action::Aggregate,
            &self.arguments,
            &self.selection,
        )
    }

    /// Unwraps exactly one envelope level and returns the scalar, as a
    /// one-element tuple. A single aggregate per statement is supported.
    fn decode(&self, response: &Response) -> Result<Vec<Row>, ProtocolError> {
        let result = response.result(&result_key(Action::Aggregate, &self.entity))?;
        Ok(vec![vec![aggregate_scalar(result)?]])
    }
}
