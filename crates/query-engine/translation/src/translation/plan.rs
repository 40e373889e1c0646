//! A validated query, with every field resolved against the schema.

use query_engine_metadata::metadata::{Arguments, ObjectField, RootField};

/// What to execute for one query. Borrows the schema it was validated against.
#[derive(Debug, Clone)]
pub struct ExecutionPlan<'s> {
    pub root_fields: Vec<RootSelection<'s>>,
}

#[derive(Debug, Clone)]
pub enum RootSelection<'s> {
    /// `__typename` on the root type.
    Typename {
        response_key: String,
        type_name: &'static str,
    },
    Field {
        response_key: String,
        field: &'s RootField,
        arguments: Arguments,
        selection: Vec<ObjectSelection<'s>>,
    },
}

#[derive(Debug, Clone)]
pub enum ObjectSelection<'s> {
    /// `__typename` on an object type.
    Typename {
        response_key: String,
        type_name: &'static str,
    },
    Field {
        response_key: String,
        field: &'s ObjectField,
    },
}
