//! Translate an incoming query string into an execution plan validated against the schema.

pub mod translation;
