//! Common functions used across translation test cases.

use query_engine_metadata::metadata::Schema;
use query_engine_translation::translation::plan::{ObjectSelection, RootSelection};
use query_engine_translation::translation::query;

/// Translate a query and return the rendered validation errors. Panics if it translates.
pub fn translation_errors(query: &str) -> Vec<String> {
    let schema = Schema::new();
    match query::translate(&schema, query) {
        Ok(plan) => panic!("expected {query:?} to fail, got {plan:?}"),
        Err(errors) => errors.iter().map(ToString::to_string).collect(),
    }
}

/// Translate a query and describe the resulting plan as `key -> field` pairs.
pub fn translated_shape(query: &str) -> Vec<(String, Vec<String>)> {
    let schema = Schema::new();
    let plan = query::translate(&schema, query).expect("query::translate");
    plan.root_fields
        .iter()
        .map(|root| match root {
            RootSelection::Typename {
                response_key,
                type_name,
            } => (format!("{response_key} -> {type_name}"), vec![]),
            RootSelection::Field {
                response_key,
                field,
                arguments,
                selection,
            } => (
                format!("{response_key} -> {}{arguments:?}", field.r#type),
                selection
                    .iter()
                    .map(|object_selection| match object_selection {
                        ObjectSelection::Typename {
                            response_key,
                            type_name,
                        } => format!("{response_key} -> __typename of {type_name}"),
                        ObjectSelection::Field {
                            response_key,
                            field,
                        } => format!("{response_key} -> {}", field.description),
                    })
                    .collect(),
            ),
        })
        .collect()
}
