use std::time::Duration;

use axum::http::StatusCode;

use covid_graph::fetch::{fetch_store, FetchError};
use covid_graph::state::{create_state, InitializationError};
use covid_graph_configuration::Configuration;
use tests_common::{fixtures, upstream};

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn loads_upstream_payload() {
    let payload = String::from_utf8(fixtures::timeseries_payload()).unwrap();
    let url = upstream::spawn_upstream(StatusCode::OK, payload);

    let store = fetch_store(&url, TIMEOUT).await.unwrap();

    similar_asserts::assert_eq!(store, fixtures::timeseries_store());
}

#[tokio::test]
async fn keeps_countries_that_decode() {
    let url = upstream::spawn_upstream(
        StatusCode::OK,
        r#"{
            "X": [{"date": "2020-01-22", "confirmed": 1, "deaths": 0, "recovered": 0}],
            "Broken": [{"date": "2020-01-22", "confirmed": -1}]
        }"#,
    );

    let store = fetch_store(&url, TIMEOUT).await.unwrap();

    similar_asserts::assert_eq!(store, fixtures::single_country_store());
}

#[tokio::test]
async fn garbage_body_gives_empty_store() {
    let url = upstream::spawn_upstream(StatusCode::OK, "<html>rate limited</html>");

    let store = fetch_store(&url, TIMEOUT).await.unwrap();

    assert!(store.is_empty());
}

#[tokio::test]
async fn non_success_status_fails() {
    let url = upstream::spawn_upstream(StatusCode::INTERNAL_SERVER_ERROR, "{}");

    let error = fetch_store(&url, TIMEOUT).await.unwrap_err();

    assert!(
        matches!(error, FetchError::Status { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR),
        "{error:?}"
    );
}

#[tokio::test]
async fn unreachable_upstream_fails() {
    let error = fetch_store(&upstream::unreachable_upstream(), TIMEOUT)
        .await
        .unwrap_err();

    assert!(matches!(error, FetchError::Request(_)), "{error:?}");
}

#[tokio::test]
async fn startup_fails_before_serving_on_bad_upstream() {
    let configuration = Configuration {
        address: "127.0.0.1:0".parse().unwrap(),
        upstream_url: upstream::spawn_upstream(StatusCode::NOT_FOUND, "not found"),
        fetch_timeout: TIMEOUT,
        country: None,
    };

    let result = create_state(&configuration, prometheus::Registry::new()).await;

    assert!(matches!(
        result,
        Err(InitializationError::FetchError(FetchError::Status { .. }))
    ));
}

#[tokio::test]
async fn startup_loads_state() {
    let payload = String::from_utf8(fixtures::timeseries_payload()).unwrap();
    let configuration = Configuration {
        address: "127.0.0.1:0".parse().unwrap(),
        upstream_url: upstream::spawn_upstream(StatusCode::OK, payload),
        fetch_timeout: TIMEOUT,
        country: Some("Italy".to_string()),
    };

    let state = create_state(&configuration, prometheus::Registry::new())
        .await
        .unwrap();

    assert_eq!(state.store.latest("Italy").map(|r| r.confirmed), Some(69176));
}
