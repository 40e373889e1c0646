//! Load the time series from the upstream source.
//!
//! This happens exactly once, before the server starts listening.

use std::time::Duration;

use thiserror::Error;
use url::Url;

use query_engine_metadata::metadata::DataStore;

/// Download the upstream payload and decode it into a store.
///
/// Any problem getting hold of the body is fatal. Problems decoding it are logged and the
/// countries that did decode are kept.
pub async fn fetch_store(upstream_url: &Url, timeout: Duration) -> Result<DataStore, FetchError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(FetchError::Client)?;

    let response = client
        .get(upstream_url.clone())
        .send()
        .await
        .map_err(FetchError::Request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: upstream_url.clone(),
            status,
        });
    }

    let body = response.bytes().await.map_err(FetchError::Body)?;

    let (store, errors) = DataStore::decode(&body);
    for error in &errors {
        tracing::warn!(
            meta.signal_type = "log",
            event.domain = "covid-graph",
            event.name = "Decode error",
            body = %error,
        );
    }
    tracing::info!(
        countries = store.len(),
        decode_errors = errors.len(),
        "loaded time series"
    );

    Ok(store)
}

/// The upstream payload could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unable to build HTTP client: {0}")]
    Client(reqwest::Error),
    #[error("request to upstream failed: {0}")]
    Request(reqwest::Error),
    #[error("upstream {url} responded with {status}")]
    Status {
        url: Url,
        status: reqwest::StatusCode,
    },
    #[error("unable to read upstream response body: {0}")]
    Body(reqwest::Error),
}
