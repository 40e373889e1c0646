use axum::{extract::State, http::header};
use prometheus::Encoder;

use crate::error::ServerError;
use crate::state::ServerState;

/// Render the registry in the Prometheus text exposition format.
pub async fn get_metrics(
    State(state): State<ServerState>,
) -> Result<([(header::HeaderName, String); 1], String), ServerError> {
    let encoder = prometheus::TextEncoder::new();
    let mut buffer = vec![];
    encoder.encode(&state.metrics_registry.gather(), &mut buffer)?;

    Ok((
        [(header::CONTENT_TYPE, encoder.format_type().to_string())],
        String::from_utf8(buffer)?,
    ))
}
