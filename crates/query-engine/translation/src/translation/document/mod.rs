//! The syntax tree of a query document and the parser producing it.
//!
//! Only the executable subset the service answers is represented: operations made of fields
//! with aliases, arguments and nested selections. Fragments, variables and directives are
//! rejected while parsing.

mod lexer;
mod parser;

use std::fmt;

use query_engine_metadata::metadata::InputValue;

pub use parser::parse;

/// A position in the query string. Lines and columns start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub operations: Vec<OperationDefinition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    pub name: Option<String>,
    pub selection_set: Vec<Field>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub selection_set: Option<Vec<Field>>,
    pub location: Location,
}

impl Field {
    /// The key this field's value is returned under.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: String,
    pub value: InputValue,
    pub location: Location,
}
