use axum::http::StatusCode;

/// The store is loaded before we start listening, so being reachable means being healthy.
pub async fn get_health() -> StatusCode {
    StatusCode::OK
}
