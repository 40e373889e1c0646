use axum::extract::State;

use crate::state::ServerState;

pub async fn get_schema(State(state): State<ServerState>) -> String {
    state.schema.to_sdl()
}
