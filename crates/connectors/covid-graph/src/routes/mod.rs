mod get_health;
mod get_metrics;
mod get_schema;
mod graphql;

use axum::{routing::get, Router};

use crate::state::ServerState;

pub use get_health::get_health;
pub use get_metrics::get_metrics;
pub use get_schema::get_schema;
pub use graphql::{get_graphql, post_graphql, GraphQLRequest};

pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route("/graphql", get(get_graphql).post(post_graphql))
        .route("/schema", get(get_schema))
        .route("/health", get(get_health))
        .route("/metrics", get(get_metrics))
        .with_state(state)
}
