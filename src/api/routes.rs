/*
 * Responsibility
 * - URL layout of the API
 * - only GET /health is registered; other methods on it get axum's 405
 */
use axum::{Router, routing::get};

use crate::api::handlers::health::health;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
