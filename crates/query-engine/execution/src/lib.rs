//! Query execution against the in-memory data store.
//!
//! A query is translated into a plan, the plan is run against the store, and the outcome is
//! always returned as a response envelope: failures become data rather than errors.

pub mod error;
pub mod execution;
pub mod metrics;
pub mod query;
pub mod response;
