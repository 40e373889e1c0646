//! The data the query engine answers from and the schema it answers against.

pub mod metadata;
