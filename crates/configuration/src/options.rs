//! Command line and environment options for the server.

use clap::Parser;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_URL: &str = "https://pomber.github.io/covid19/timeseries.json";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Serve the latest COVID-19 figures per country over a GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(version)]
pub struct ServerOptions {
    /// Country whose latest figures are logged once the data is loaded.
    #[arg(value_name = "COUNTRY")]
    pub country: Option<String>,

    /// The address to listen on.
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// The port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Where the time series is fetched from at startup.
    #[arg(long, env = "COVID_GRAPH_UPSTREAM_URL", default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    /// How long to wait for the upstream before giving up.
    #[arg(
        long,
        env = "COVID_GRAPH_FETCH_TIMEOUT_SECS",
        default_value_t = DEFAULT_FETCH_TIMEOUT_SECS
    )]
    pub fetch_timeout_secs: u64,
}
