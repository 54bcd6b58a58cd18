//! `findMany` statement.

use serde_json::Value;

use super::{full_object_selection, wire_document, Statement};
use crate::plan::{Action, CacheStrategy, QueryPlan};
use crate::protocol::{result_key, result_object, tuple_from_object, ProtocolError, Response, Row};
use crate::translate::{expand_joins, where_clause, JsonMap, TranslateResult};

/// A read over one entity, optionally filtered, with related-entity
/// inclusions.
///
/// The only statement that carries a cache strategy: reads are the only
/// cacheable round-trips.
#[derive(Debug, Clone)]
pub struct FindStatement {
    entity: String,
    fields: Vec<String>,
    arguments: JsonMap,
    selection: JsonMap,
    /// Join field names in declaration order, replayed at decode.
    joins: Vec<String>,
    cache_strategy: Option<CacheStrategy>,
}

impl FindStatement {
    pub(crate) fn from_plan(plan: QueryPlan) -> TranslateResult<Self> {
        let conditions = match &plan.predicate {
            Some(predicate) => where_clause(predicate)?,
            None => JsonMap::new(),
        };
        let mut arguments = JsonMap::new();
        arguments.insert("where".to_string(), Value::Object(conditions));

        let mut selection = full_object_selection();
        let joins = expand_joins(&mut selection, &plan.joins);

        Ok(Self {
            entity: plan.entity,
            fields: plan.fields,
            arguments,
            selection,
            joins,
            cache_strategy: plan.cache_strategy,
        })
    }
}

impl Statement for FindStatement {
    fn serialize(&self) -> Value {
        wire_document(&self.entity, Action::Find, &self.arguments, &self.selection)
    }

    /// A list result decodes element by element; a single object decodes to
    /// a one-element list. Callers that require exactly one row assert the
    /// length themselves.
    fn decode(&self, response: &Response) -> Result<Vec<Row>, ProtocolError> {
        let result = response.result(&result_key(Action::Find, &self.entity))?;
        match result {
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    let object = result_object(item, "findMany list element")?;
                    tuple_from_object(object, &self.fields, &self.joins)
                })
                .collect(),
            single => {
                let object = result_object(single, "findMany result")?;
                Ok(vec![tuple_from_object(object, &self.fields, &self.joins)?])
            }
        }
    }

    fn cache_strategy(&self) -> Option<&CacheStrategy> {
        self.cache_strategy.as_ref()
    }
}
