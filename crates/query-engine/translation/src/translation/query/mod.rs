//! Translate a query string into an execution plan.

mod fields;
mod values;

use indexmap::IndexMap;

use query_engine_metadata::metadata::{Schema, ScalarType, TYPENAME_FIELD};

use crate::translation::document::{self, OperationKind};
use crate::translation::error::Error;
use crate::translation::plan::{ExecutionPlan, RootSelection};

/// Parse a query string and validate it against the schema.
///
/// Every validation problem found is returned. At each level, response-key conflicts are
/// reported before the problems of the individual fields.
pub fn translate<'s>(schema: &'s Schema, query: &str) -> Result<ExecutionPlan<'s>, Vec<Error>> {
    let document = document::parse(query).map_err(|err| vec![err])?;

    let Ok([operation]) = <[_; 1]>::try_from(document.operations) else {
        return Err(vec![Error::MultipleOperations]);
    };

    if operation.kind != OperationKind::Query {
        return Err(vec![Error::UnsupportedOperation {
            kind: operation.kind,
            location: operation.location,
        }]);
    }

    let query_type_name = schema.query_type_name();
    let mut errors = vec![];
    let mut root_fields = vec![];

    for field in fields::merge_fields(operation.selection_set, &mut errors) {
        let response_key = field.response_key().to_string();

        if field.name == TYPENAME_FIELD {
            fields::check_leaf(&field, ScalarType::String, &mut errors);
            values::translate_arguments(&field, query_type_name, &IndexMap::new(), &mut errors);
            root_fields.push(RootSelection::Typename {
                response_key,
                type_name: query_type_name,
            });
            continue;
        }

        let Some(root_field) = schema.root_field(&field.name) else {
            errors.push(Error::UnknownField {
                field_name: field.name.clone(),
                type_name: query_type_name.to_string(),
                location: field.location,
            });
            continue;
        };

        let arguments =
            values::translate_arguments(&field, query_type_name, &root_field.arguments, &mut errors);

        let Some(object_type) = schema.object_type(root_field.r#type) else {
            errors.push(Error::UnknownField {
                field_name: field.name.clone(),
                type_name: query_type_name.to_string(),
                location: field.location,
            });
            continue;
        };

        let Some(selection_set) = field.selection_set else {
            errors.push(Error::MissingSelection {
                field_name: field.name.clone(),
                type_name: object_type.name.to_string(),
                location: field.location,
            });
            continue;
        };

        root_fields.push(RootSelection::Field {
            response_key,
            field: root_field,
            arguments,
            selection: fields::translate_object_selection(object_type, selection_set, &mut errors),
        });
    }

    if errors.is_empty() {
        Ok(ExecutionPlan { root_fields })
    } else {
        tracing::debug!(errors = errors.len(), "query failed validation");
        Err(errors)
    }
}
