use axum::response::IntoResponse;

// Liveness probe; plain text per the wire contract.
pub async fn health_check() -> impl IntoResponse {
    "server is running"
}
