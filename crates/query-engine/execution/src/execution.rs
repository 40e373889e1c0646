//! Execute an execution plan against the data store.

use serde_json::{Map, Value};

use query_engine_metadata::metadata::{DailyRecord, DataStore};
use query_engine_translation::translation::plan::{ExecutionPlan, ObjectSelection, RootSelection};

/// Run every root field of the plan, keyed by response key in the order they were requested.
pub fn execute(store: &DataStore, plan: &ExecutionPlan) -> Map<String, Value> {
    plan.root_fields
        .iter()
        .map(|root| match root {
            RootSelection::Typename {
                response_key,
                type_name,
            } => (response_key.clone(), Value::from(*type_name)),
            RootSelection::Field {
                response_key,
                field,
                arguments,
                selection,
            } => {
                let value = match (field.resolve)(store, arguments) {
                    Some(record) => Value::Object(project(record, selection)),
                    None => Value::Null,
                };
                (response_key.clone(), value)
            }
        })
        .collect()
}

/// Pick the selected fields out of a record.
fn project(record: &DailyRecord, selection: &[ObjectSelection]) -> Map<String, Value> {
    selection
        .iter()
        .map(|object_selection| match object_selection {
            ObjectSelection::Typename {
                response_key,
                type_name,
            } => (response_key.clone(), Value::from(*type_name)),
            ObjectSelection::Field {
                response_key,
                field,
            } => (response_key.clone(), (field.resolve)(record)),
        })
        .collect()
}
