//! Answer a query string with a response envelope.

use tracing::info_span;

use query_engine_metadata::metadata::{DataStore, Schema};
use query_engine_translation::translation;

use crate::error::Error;
use crate::execution;
use crate::metrics::Metrics;
use crate::response::QueryResponse;

/// Translate and execute a query.
///
/// This never fails: a missing query, syntax errors and validation errors are all reported in
/// the envelope's error list with `data` set to null. Running the same query against the same
/// store always produces the same envelope.
pub fn execute_query(
    schema: &Schema,
    store: &DataStore,
    metrics: &Metrics,
    query: Option<&str>,
) -> QueryResponse {
    let span = info_span!("Execute query");
    let _enter = span.enter();

    let response = match query {
        None => QueryResponse::from_errors([Error::MissingQuery]),
        Some(query) => match translation::query::translate(schema, query) {
            Ok(plan) => QueryResponse::from_data(execution::execute(store, &plan)),
            Err(errors) => QueryResponse::from_errors(errors.into_iter().map(Error::from)),
        },
    };

    if !response.is_ok() {
        tracing::warn!(
            meta.signal_type = "log",
            event.domain = "covid-graph",
            event.name = "Query error",
            errors = ?response.errors,
        );
    }
    metrics.record_query(&response);

    response
}
