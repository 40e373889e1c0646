//! Configuration for the server.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use url::Url;

use crate::error::ConfigurationError;
use crate::options::ServerOptions;

/// The 'Configuration' type collects all the information necessary to start serving.
///
/// Values of this type are produced from 'ServerOptions' using 'make_runtime_configuration',
/// which is the only place the raw options are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub address: SocketAddr,
    pub upstream_url: Url,
    pub fetch_timeout: Duration,
    pub country: Option<String>,
}

/// Validate the raw options.
pub fn make_runtime_configuration(
    options: ServerOptions,
) -> Result<Configuration, ConfigurationError> {
    let ip: IpAddr = options
        .host
        .parse()
        .map_err(|source| ConfigurationError::InvalidAddress {
            host: options.host.clone(),
            port: options.port,
            source,
        })?;

    let upstream_url =
        Url::parse(&options.upstream_url).map_err(|source| ConfigurationError::InvalidUpstreamUrl {
            url: options.upstream_url.clone(),
            source,
        })?;
    if !matches!(upstream_url.scheme(), "http" | "https") {
        return Err(ConfigurationError::UnsupportedScheme(
            upstream_url.scheme().to_string(),
        ));
    }

    if options.fetch_timeout_secs == 0 {
        return Err(ConfigurationError::ZeroTimeout);
    }

    Ok(Configuration {
        address: SocketAddr::new(ip, options.port),
        upstream_url,
        fetch_timeout: Duration::from_secs(options.fetch_timeout_secs),
        country: options.country,
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::options::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_UPSTREAM_URL};

    /// Parse arguments, pinning the listen address so `HOST` and `PORT` from the environment
    /// do not leak in.
    fn options(args: &[&str]) -> ServerOptions {
        let mut argv = vec!["covid-graph"];
        if !args.contains(&"--host") {
            argv.extend(["--host", "127.0.0.1"]);
        }
        if !args.contains(&"--port") {
            argv.extend(["--port", "3000"]);
        }
        argv.extend(args);
        ServerOptions::try_parse_from(argv).unwrap()
    }

    #[test]
    fn explicit_arguments() {
        let configuration = make_runtime_configuration(options(&[
            "Italy",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--upstream-url",
            "http://localhost:9000/timeseries.json",
            "--fetch-timeout-secs",
            "5",
        ]))
        .unwrap();

        similar_asserts::assert_eq!(
            configuration,
            Configuration {
                address: "127.0.0.1:8080".parse().unwrap(),
                upstream_url: Url::parse("http://localhost:9000/timeseries.json").unwrap(),
                fetch_timeout: Duration::from_secs(5),
                country: Some("Italy".to_string()),
            }
        );
    }

    #[test]
    fn defaults() {
        let options = options(&[]);
        assert_eq!(options.upstream_url, DEFAULT_UPSTREAM_URL);
        assert_eq!(options.fetch_timeout_secs, DEFAULT_FETCH_TIMEOUT_SECS);
        assert_eq!(options.country, None);
    }

    #[test]
    fn accepts_ipv6_hosts() {
        let configuration = make_runtime_configuration(options(&["--host", "::1", "--port", "1"]))
            .unwrap();
        assert_eq!(configuration.address, "[::1]:1".parse().unwrap());
    }

    #[test]
    fn rejects_unparseable_url() {
        let error = make_runtime_configuration(options(&["--upstream-url", "not a url"]))
            .unwrap_err();
        assert!(matches!(error, ConfigurationError::InvalidUpstreamUrl { .. }));
    }

    #[test]
    fn rejects_non_http_url() {
        let error = make_runtime_configuration(options(&["--upstream-url", "file:///tmp/x.json"]))
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "unsupported upstream URL scheme \"file\", expected http or https"
        );
    }

    #[test]
    fn rejects_zero_timeout() {
        let error = make_runtime_configuration(options(&["--fetch-timeout-secs", "0"])).unwrap_err();
        assert!(matches!(error, ConfigurationError::ZeroTimeout));
    }

    #[test]
    fn rejects_bad_host() {
        let error = make_runtime_configuration(options(&["--host", "example.com"])).unwrap_err();
        assert!(matches!(error, ConfigurationError::InvalidAddress { .. }));
    }

    #[test]
    fn rejects_bad_port() {
        assert!(ServerOptions::try_parse_from(["covid-graph", "--port", "http"]).is_err());
    }
}
