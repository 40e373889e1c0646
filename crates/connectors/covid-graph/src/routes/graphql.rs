use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use query_engine_execution::query::execute_query;
use query_engine_execution::response::QueryResponse;

use crate::state::ServerState;

/// The query, either from the URL or from a JSON body.
///
/// A missing query is not rejected here; it is reported inside the envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphQLRequest {
    pub query: Option<String>,
}

impl GraphQLRequest {
    /// Take the first `query` URL parameter. Repeats and unknown parameters are ignored.
    pub fn from_parameters(parameters: Vec<(String, String)>) -> Self {
        GraphQLRequest {
            query: parameters
                .into_iter()
                .find_map(|(name, value)| (name == "query").then_some(value)),
        }
    }
}

pub async fn get_graphql(
    State(state): State<ServerState>,
    Query(parameters): Query<Vec<(String, String)>>,
) -> Json<QueryResponse> {
    Json(run(&state, &GraphQLRequest::from_parameters(parameters)))
}

pub async fn post_graphql(
    State(state): State<ServerState>,
    Json(request): Json<GraphQLRequest>,
) -> Json<QueryResponse> {
    Json(run(&state, &request))
}

fn run(state: &ServerState, request: &GraphQLRequest) -> QueryResponse {
    execute_query(
        &state.schema,
        &state.store,
        &state.metrics,
        request.query.as_deref(),
    )
}
