//! Start up and run the server.

use std::net::SocketAddr;

use covid_graph_configuration::{make_runtime_configuration, ServerOptions};

use crate::routes::create_router;
use crate::state::{create_state, InitializationError, ServerState};

/// Validate the options, load the time series, then serve until interrupted.
pub async fn run(options: ServerOptions) -> Result<(), InitializationError> {
    let configuration =
        make_runtime_configuration(options).map_err(InitializationError::ConfigurationError)?;
    let state = create_state(&configuration, prometheus::Registry::new()).await?;
    serve(configuration.address, state).await
}

pub async fn serve(address: SocketAddr, state: ServerState) -> Result<(), InitializationError> {
    let router = create_router(state);
    let server = axum::Server::try_bind(&address).map_err(InitializationError::ServeError)?;

    tracing::info!("Starting server on {}", address);
    server
        .serve(router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(InitializationError::ServeError)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(
            meta.signal_type = "log",
            event.domain = "covid-graph",
            event.name = "Signal error",
            body = %err,
        );
    }
    tracing::info!("shutting down");
}
