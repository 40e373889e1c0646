//! Common functions used across execution test cases.

use query_engine_execution::metrics::Metrics;
use query_engine_execution::query::execute_query;
use query_engine_execution::response::QueryResponse;
use query_engine_metadata::metadata::{CountryHistory, DailyRecord, DataStore, Schema};

pub fn record(date: &str, confirmed: u64, deaths: u64, recovered: u64) -> DailyRecord {
    DailyRecord {
        date: date.to_string(),
        confirmed,
        deaths,
        recovered,
    }
}

/// A store holding country "X" with two days of history.
pub fn store() -> DataStore {
    DataStore::from_iter([(
        "X".to_string(),
        CountryHistory::new(vec![
            record("2020-01-21", 0, 0, 0),
            record("2020-01-22", 1, 0, 0),
        ]),
    )])
}

/// Run a query against [`store`] with a fresh schema and metrics registry.
pub fn run_query(query: Option<&str>) -> QueryResponse {
    let schema = Schema::new();
    let metrics = Metrics::initialize(&mut prometheus::Registry::new()).unwrap();
    execute_query(&schema, &store(), &metrics, query)
}

/// Run a query and serialize the envelope as it would go over the wire.
pub fn run_query_json(query: &str) -> serde_json::Value {
    serde_json::to_value(run_query(Some(query))).unwrap()
}
