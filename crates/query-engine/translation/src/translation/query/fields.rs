//! Handle selection sets: merging fields that share a response key and resolving object fields.

use indexmap::IndexMap;

use query_engine_metadata::metadata::{ObjectType, ScalarType, TYPENAME_FIELD};

use super::values;
use crate::translation::document::{Argument, Field};
use crate::translation::error::Error;
use crate::translation::plan::ObjectSelection;

/// Collapse fields with the same response key into one.
///
/// Two fields may share a key only if they select the same field with the same arguments; their
/// selection sets are then combined. Anything else is a conflict, and the later field is dropped.
pub(crate) fn merge_fields(fields: Vec<Field>, errors: &mut Vec<Error>) -> Vec<Field> {
    let mut merged: IndexMap<String, Field> = IndexMap::new();

    for field in fields {
        let Some(existing) = merged.get_mut(field.response_key()) else {
            merged.insert(field.response_key().to_string(), field);
            continue;
        };

        let conflict = || Error::FieldConflict {
            response_key: field.response_key().to_string(),
            location: field.location,
        };

        if existing.name != field.name || !same_arguments(&existing.arguments, &field.arguments) {
            errors.push(conflict());
            continue;
        }

        match (&mut existing.selection_set, &field.selection_set) {
            (Some(selection), Some(more)) => selection.extend(more.iter().cloned()),
            (None, None) => {}
            _ => errors.push(conflict()),
        }
    }

    merged.into_values().collect()
}

fn same_arguments(left: &[Argument], right: &[Argument]) -> bool {
    left.len() == right.len()
        && left.iter().all(|argument| {
            right
                .iter()
                .any(|other| other.name == argument.name && other.value == argument.value)
        })
}

/// Validate a selection set against an object type.
pub(crate) fn translate_object_selection<'s>(
    object_type: &'s ObjectType,
    fields: Vec<Field>,
    errors: &mut Vec<Error>,
) -> Vec<ObjectSelection<'s>> {
    let mut selection = vec![];

    for field in merge_fields(fields, errors) {
        let response_key = field.response_key().to_string();

        if field.name == TYPENAME_FIELD {
            check_leaf(&field, ScalarType::String, errors);
            values::translate_arguments(&field, object_type.name, &IndexMap::new(), errors);
            selection.push(ObjectSelection::Typename {
                response_key,
                type_name: object_type.name,
            });
            continue;
        }

        let Some(object_field) = object_type.fields.get(field.name.as_str()) else {
            errors.push(Error::UnknownField {
                field_name: field.name.clone(),
                type_name: object_type.name.to_string(),
                location: field.location,
            });
            continue;
        };

        check_leaf(&field, object_field.r#type, errors);
        values::translate_arguments(&field, object_type.name, &IndexMap::new(), errors);
        selection.push(ObjectSelection::Field {
            response_key,
            field: object_field,
        });
    }

    selection
}

/// Scalar fields cannot have a selection set.
pub(crate) fn check_leaf(field: &Field, scalar_type: ScalarType, errors: &mut Vec<Error>) {
    if field.selection_set.is_some() {
        errors.push(Error::UnexpectedSelection {
            field_name: field.name.clone(),
            type_name: scalar_type.name().to_string(),
            location: field.location,
        });
    }
}
