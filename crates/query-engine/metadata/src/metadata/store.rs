//! The in-memory snapshot of the upstream time series.
//!
//! A `DataStore` is decoded once from the upstream payload and only ever read afterwards.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One day's cumulative metrics for one country.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
pub struct DailyRecord {
    /// The calendar date, formatted as the upstream publishes it (e.g. `2020-1-22`).
    pub date: String,
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
}

/// The daily records of one country, in the order the upstream delivers them (date ascending).
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CountryHistory(Vec<DailyRecord>);

impl CountryHistory {
    pub fn new(records: Vec<DailyRecord>) -> Self {
        CountryHistory(records)
    }

    /// The most recent record, if the history is not empty.
    pub fn latest(&self) -> Option<&DailyRecord> {
        self.0.last()
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Country name to that country's history. Keys are case-sensitive.
///
/// There is no way to mutate a store once it has been built.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct DataStore {
    countries: BTreeMap<String, CountryHistory>,
}

/// A part of the upstream payload that could not be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("upstream payload is not a JSON object of country histories: {0}")]
    Payload(serde_json::Error),
    #[error("history of country {country:?} could not be decoded: {source}")]
    Country {
        country: String,
        source: serde_json::Error,
    },
}

impl DataStore {
    pub fn empty() -> Self {
        DataStore::default()
    }

    /// Decode an upstream payload leniently.
    ///
    /// Every country whose history decodes is kept. Countries that fail are left out and
    /// reported, as is a body that is not a JSON object at all (which yields an empty store).
    pub fn decode(payload: &[u8]) -> (DataStore, Vec<DecodeError>) {
        let raw: serde_json::Map<String, serde_json::Value> = match serde_json::from_slice(payload)
        {
            Ok(raw) => raw,
            Err(err) => return (DataStore::empty(), vec![DecodeError::Payload(err)]),
        };

        let mut countries = BTreeMap::new();
        let mut errors = vec![];
        for (country, history) in raw {
            match serde_json::from_value::<CountryHistory>(history) {
                Ok(history) => {
                    countries.insert(country, history);
                }
                Err(source) => errors.push(DecodeError::Country { country, source }),
            }
        }

        (DataStore { countries }, errors)
    }

    pub fn get(&self, country: &str) -> Option<&CountryHistory> {
        self.countries.get(country)
    }

    /// The most recent record of a country, if it is known and has any records.
    pub fn latest(&self, country: &str) -> Option<&DailyRecord> {
        self.get(country).and_then(CountryHistory::latest)
    }

    /// Country names in sorted order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl FromIterator<(String, CountryHistory)> for DataStore {
    fn from_iter<I: IntoIterator<Item = (String, CountryHistory)>>(iter: I) -> Self {
        DataStore {
            countries: iter.into_iter().collect(),
        }
    }
}
