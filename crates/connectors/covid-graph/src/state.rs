//! State shared by every request handler.
//!
//! This is initialized on startup and never changes afterwards.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info_span, Instrument};

use covid_graph_configuration::{Configuration, ConfigurationError};
use query_engine_execution::metrics;
use query_engine_metadata::metadata::{DataStore, Schema};

use crate::fetch::{self, FetchError};

/// State for our server.
#[derive(Clone)]
pub struct ServerState {
    pub schema: Arc<Schema>,
    pub store: Arc<DataStore>,
    pub metrics: metrics::Metrics,
    pub metrics_registry: prometheus::Registry,
}

impl ServerState {
    /// Wrap an already loaded store, registering our metrics with the given registry.
    pub fn new(
        store: DataStore,
        mut metrics_registry: prometheus::Registry,
    ) -> Result<Self, InitializationError> {
        let metrics = metrics::Metrics::initialize(&mut metrics_registry)
            .map_err(InitializationError::MetricsError)?;

        Ok(ServerState {
            schema: Arc::new(Schema::new()),
            store: Arc::new(store),
            metrics,
            metrics_registry,
        })
    }
}

/// Fetch the time series and wrap it inside a server state.
pub async fn create_state(
    configuration: &Configuration,
    metrics_registry: prometheus::Registry,
) -> Result<ServerState, InitializationError> {
    let store = fetch::fetch_store(&configuration.upstream_url, configuration.fetch_timeout)
        .instrument(info_span!(
            "Fetch time series",
            url = %configuration.upstream_url
        ))
        .await
        .map_err(InitializationError::FetchError)?;

    if let Some(country) = &configuration.country {
        match store.latest(country) {
            Some(record) => tracing::info!(
                country,
                date = %record.date,
                confirmed = record.confirmed,
                deaths = record.deaths,
                recovered = record.recovered,
                "latest figures"
            ),
            None => tracing::warn!(country, "no figures for country"),
        }
    }

    async { ServerState::new(store, metrics_registry) }
        .instrument(info_span!("Setup metrics"))
        .await
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("{0}")]
    ConfigurationError(ConfigurationError),
    #[error("unable to load the time series: {0}")]
    FetchError(FetchError),
    #[error("error initializing metrics: {0}")]
    MetricsError(prometheus::Error),
    #[error("unable to serve: {0}")]
    ServeError(hyper::Error),
}
