//! A local stand-in for the upstream data source.

use std::net::TcpListener;

use axum::{http::StatusCode, routing::get, Router};
use url::Url;

pub const TIMESERIES_ROUTE: &str = "/timeseries.json";

/// Serve a fixed response at [`TIMESERIES_ROUTE`] on a free local port, and return its URL.
///
/// The server runs in the background until the test's runtime shuts down.
pub fn spawn_upstream(status: StatusCode, body: impl Into<String>) -> Url {
    let body: String = body.into();
    let router = Router::new().route(TIMESERIES_ROUTE, get(move || async move { (status, body) }));

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(router.into_make_service());
    tokio::spawn(server);

    Url::parse(&format!("http://{address}{TIMESERIES_ROUTE}")).unwrap()
}

/// A URL on a local port nothing is listening on.
pub fn unreachable_upstream() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    Url::parse(&format!("http://{address}{TIMESERIES_ROUTE}")).unwrap()
}
