//! Errors for query translation.

use thiserror::Error;

use super::document::{Location, OperationKind};

/// A type for translation errors.
///
/// The rendered message of each error is what ends up in the response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Syntax Error: {message} ({location})")]
    Syntax { message: String, location: Location },
    #[error("Must provide operation name if query contains multiple operations.")]
    MultipleOperations,
    #[error("Schema is not configured for {kind}s. ({location})")]
    UnsupportedOperation {
        kind: OperationKind,
        location: Location,
    },
    #[error("Cannot query field \"{field_name}\" on type \"{type_name}\". ({location})")]
    UnknownField {
        field_name: String,
        type_name: String,
        location: Location,
    },
    #[error(
        "Unknown argument \"{argument_name}\" on field \"{field_name}\" of type \"{type_name}\". ({location})"
    )]
    UnknownArgument {
        argument_name: String,
        field_name: String,
        type_name: String,
        location: Location,
    },
    #[error("There can be only one argument named \"{argument_name}\". ({location})")]
    DuplicateArgument {
        argument_name: String,
        location: Location,
    },
    #[error(
        "Field \"{field_name}\" of type \"{type_name}\" must have a selection of subfields. ({location})"
    )]
    MissingSelection {
        field_name: String,
        type_name: String,
        location: Location,
    },
    #[error(
        "Field \"{field_name}\" must not have a selection since type \"{type_name}\" has no subfields. ({location})"
    )]
    UnexpectedSelection {
        field_name: String,
        type_name: String,
        location: Location,
    },
    #[error(
        "Fields \"{response_key}\" conflict because they select different fields or arguments. ({location})"
    )]
    FieldConflict {
        response_key: String,
        location: Location,
    },
}

impl Error {
    pub(crate) fn syntax(message: impl Into<String>, location: Location) -> Self {
        Error::Syntax {
            message: message.into(),
            location,
        }
    }
}
