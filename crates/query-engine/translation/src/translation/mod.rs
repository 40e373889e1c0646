//! Translate the incoming query string to an ExecutionPlan to be run against the data store.

pub mod document;
pub mod error;
pub mod plan;
pub mod query;
