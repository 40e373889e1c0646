//! Resolvers bound to the schema's fields.

use super::schema::{Arguments, InputValue};
use super::store::{DailyRecord, DataStore};

/// The argument of the `country` root field. Shared by the schema declaration and the
/// resolver so the two cannot disagree.
pub const COUNTRY_NAME_ARGUMENT: &str = "name";

/// Resolve the `country` root field to the latest record of the named country.
///
/// A missing argument, an argument that is not a string, and an unknown country all resolve
/// to no value rather than an error.
pub fn resolve_country<'a>(store: &'a DataStore, arguments: &Arguments) -> Option<&'a DailyRecord> {
    match arguments.get(COUNTRY_NAME_ARGUMENT) {
        Some(InputValue::String(name)) => store.latest(name),
        _ => None,
    }
}

pub fn date(record: &DailyRecord) -> serde_json::Value {
    serde_json::Value::from(record.date.as_str())
}

pub fn confirmed(record: &DailyRecord) -> serde_json::Value {
    serde_json::Value::from(record.confirmed)
}

pub fn deaths(record: &DailyRecord) -> serde_json::Value {
    serde_json::Value::from(record.deaths)
}

pub fn recovered(record: &DailyRecord) -> serde_json::Value {
    serde_json::Value::from(record.recovered)
}
