//! Handle the translation of argument values.

use indexmap::IndexMap;

use query_engine_metadata::metadata::{ArgumentDefinition, Arguments};

use crate::translation::document::Field;
use crate::translation::error::Error;

/// Check the arguments of a field against the arguments it declares.
///
/// Values are passed through untouched: a value of the wrong type is the resolver's concern,
/// which treats it as absent.
pub(crate) fn translate_arguments(
    field: &Field,
    type_name: &str,
    definitions: &IndexMap<&'static str, ArgumentDefinition>,
    errors: &mut Vec<Error>,
) -> Arguments {
    let mut arguments = Arguments::new();

    for argument in &field.arguments {
        if !definitions.contains_key(argument.name.as_str()) {
            errors.push(Error::UnknownArgument {
                argument_name: argument.name.clone(),
                field_name: field.name.clone(),
                type_name: type_name.to_string(),
                location: argument.location,
            });
        } else if arguments.contains_key(&argument.name) {
            errors.push(Error::DuplicateArgument {
                argument_name: argument.name.clone(),
                location: argument.location,
            });
        } else {
            arguments.insert(argument.name.clone(), argument.value.clone());
        }
    }

    arguments
}
