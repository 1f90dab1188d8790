//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check
//! - `POST /`            - Create a short link
//! - `GET  /{short_id}`  - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, method and header

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    api::routes::public_routes()
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(tracing::layer())
                .layer(cors::layer()),
        )
}
