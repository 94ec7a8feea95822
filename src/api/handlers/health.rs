/*
 * Responsibility
 * - GET /health (liveness probe)
 * - stateless and infallible: same payload on every call
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub const OK: Self = Self { status: "ok" };
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::OK))
}
