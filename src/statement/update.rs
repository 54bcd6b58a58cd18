//! `updateMany` statement.

use serde_json::Value;

use super::{full_object_selection, wire_document, Statement};
use crate::plan::{Action, QueryPlan};
use crate::protocol::{mutation_count, result_key, ProtocolError, Response, Row};
use crate::translate::{normalize, where_clause, JsonMap, TranslateResult};

/// A filtered bulk update. The remote reports only a mutation count back.
#[derive(Debug, Clone)]
pub struct UpdateManyStatement {
    entity: String,
    arguments: JsonMap,
    selection: JsonMap,
}

impl UpdateManyStatement {
    pub(crate) fn from_plan(plan: QueryPlan) -> TranslateResult<Self> {
        let conditions = match &plan.predicate {
            Some(predicate) => where_clause(predicate)?,
            None => JsonMap::new(),
        };
        let mut data = JsonMap::new();
        for (field, value) in &plan.assignments {
            data.insert(field.clone(), normalize(value));
        }
        let mut arguments = JsonMap::new();
        arguments.insert("where".to_string(), Value::Object(conditions));
        arguments.insert("data".to_string(), Value::Object(data));

        Ok(Self {
            entity: plan.entity,
            arguments,
            selection: full_object_selection(),
        })
    }
}

impl Statement for UpdateManyStatement {
    fn serialize(&self) -> Value {
        wire_document(
            &self.entity,
            Action::UpdateMany,
            &self.arguments,
            &self.selection,
        )
    }

    /// Decodes to a single-element tuple holding the reported count.
    fn decode(&self, response: &Response) -> Result<Vec<Row>, ProtocolError> {
        let result = response.result(&result_key(Action::UpdateMany, &self.entity))?;
        Ok(vec![vec![mutation_count(result)?]])
    }
}
