//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Static single-segment paths that shadow `/{short_id}`.
pub const RESERVED_PATHS: &[&str] = &["health"];

/// Public routes of the service. No authentication is required.
///
/// # Endpoints
///
/// - `GET  /health`      - Health check with store size
/// - `POST /`            - Allocate a short id for a URL
/// - `GET  /{short_id}`  - Redirect to the target URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/", post(shorten_handler))
        .route("/{short_id}", get(redirect_handler))
}
