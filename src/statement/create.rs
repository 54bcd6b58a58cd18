//! `createOne` statement.

use serde_json::Value;

use super::{full_object_selection, wire_document, Statement};
use crate::plan::{Action, QueryPlan};
use crate::protocol::{result_key, result_object, tuple_from_object, ProtocolError, Response, Row};
use crate::translate::{normalize, JsonMap, TranslateError, TranslateResult};

/// A single-row insert, zipping the plan's fields against its one value row.
#[derive(Debug, Clone)]
pub struct CreateStatement {
    entity: String,
    fields: Vec<String>,
    arguments: JsonMap,
    selection: JsonMap,
}

impl CreateStatement {
    pub(crate) fn from_plan(plan: QueryPlan) -> TranslateResult<Self> {
        let mut rows = plan.rows;
        if rows.len() != 1 {
            return Err(TranslateError::MultiRowCreate { rows: rows.len() });
        }
        let row = rows.remove(0);

        let mut data = JsonMap::new();
        for (field, value) in plan.fields.iter().zip(&row) {
            data.insert(field.clone(), normalize(value));
        }
        let mut arguments = JsonMap::new();
        arguments.insert("data".to_string(), Value::Object(data));

        Ok(Self {
            entity: plan.entity,
            fields: plan.fields,
            arguments,
            selection: full_object_selection(),
        })
    }
}

impl Statement for CreateStatement {
    fn serialize(&self) -> Value {
        wire_document(
            &self.entity,
            Action::Create,
            &self.arguments,
            &self.selection,
        )
    }

    /// Decodes like a single find row.
    fn decode(&self, response: &Response) -> Result<Vec<Row>, ProtocolError> {
        let result = response.result(&result_key(Action::Create, &self.entity))?;
        let object = result_object(result, "createOne result")?;
        Ok(vec![tuple_from_object(object, &self.fields, &[])?])
    }
}
