//! Data used across test cases.

use std::path::PathBuf;

use query_engine_metadata::metadata::{CountryHistory, DailyRecord, DataStore};

pub const TIMESERIES_FIXTURE_PATH: &str = "static/timeseries.json";

/// Find the project root via the crate root provided by `cargo test`,
/// and get a file relative to it.
/// This depends on the convention that this crate lives in `/crates/tests/<name>`.
pub fn get_path_from_project_root(path: &str) -> PathBuf {
    let mut d = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    d.push("../../../");
    d.push(path);
    d
}

/// The raw bytes of the bundled upstream payload.
pub fn timeseries_payload() -> Vec<u8> {
    std::fs::read(get_path_from_project_root(TIMESERIES_FIXTURE_PATH)).unwrap()
}

/// The bundled upstream payload, decoded. Panics if any part of it fails to decode.
pub fn timeseries_store() -> DataStore {
    let (store, errors) = DataStore::decode(&timeseries_payload());
    assert!(errors.is_empty(), "fixture failed to decode: {errors:?}");
    store
}

/// A store holding a single country "X" with a single day.
pub fn single_country_store() -> DataStore {
    DataStore::from_iter([(
        "X".to_string(),
        CountryHistory::new(vec![DailyRecord {
            date: "2020-01-22".to_string(),
            confirmed: 1,
            deaths: 0,
            recovered: 0,
        }]),
    )])
}
