//! Errors that can be thrown when validating server options.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("invalid listen address {host}:{port}: {source}")]
    InvalidAddress {
        host: String,
        port: u16,
        source: std::net::AddrParseError,
    },
    #[error("invalid upstream URL {url:?}: {source}")]
    InvalidUpstreamUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("unsupported upstream URL scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),
    #[error("the fetch timeout must be at least one second")]
    ZeroTimeout,
}
