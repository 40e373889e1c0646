//! Drive the router in-process.

use axum::http::StatusCode;
use axum_test_helper::TestClient;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use covid_graph::routes;
use covid_graph::state::ServerState;
use query_engine_metadata::metadata::DataStore;

/// Creates a router with a fresh state and metrics registry around the given store.
pub fn create_router_from_store(store: DataStore) -> axum::Router {
    let _ = env_logger::builder().is_test(true).try_init();

    let state = ServerState::new(store, prometheus::Registry::new()).unwrap();
    routes::create_router(state)
}

/// Send a query as a URL parameter.
pub async fn run_graphql_get(router: axum::Router, query: &str) -> (StatusCode, serde_json::Value) {
    let client = TestClient::new(router);
    let url = format!(
        "/graphql?query={}",
        utf8_percent_encode(query, NON_ALPHANUMERIC)
    );
    let res = client.get(&url).send().await;
    (res.status(), res.json().await)
}

/// Send a JSON request body.
pub async fn run_graphql_post(
    router: axum::Router,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let client = TestClient::new(router);
    let res = client
        .post("/graphql")
        .body(body.to_string())
        .header("Content-Type", "application/json")
        .send()
        .await;
    (res.status(), res.json().await)
}
