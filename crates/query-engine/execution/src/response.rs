//! The result envelope returned for every query.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// `{"data": ..., "errors": [...]}`.
///
/// `data` is `null` when the query could not be executed at all. `errors` is left out when
/// there are none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub data: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl QueryResponse {
    pub fn from_data(data: serde_json::Map<String, serde_json::Value>) -> Self {
        QueryResponse {
            data: Some(data),
            errors: vec![],
        }
    }

    pub fn from_errors(errors: impl IntoIterator<Item = Error>) -> Self {
        QueryResponse {
            data: None,
            errors: errors.into_iter().map(|err| err.to_string()).collect(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}
