//! # tinylink
//!
//! An in-memory URL shortener built with Axum.
//!
//! Long URLs are mapped to short base62 identifiers derived from a SHA-256
//! digest of the URL salted with fresh OS entropy. Allocation reserves each
//! candidate atomically and retries on collision within a bounded budget.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities plus store and generator traits
//! - **Application Layer** ([`application`]) - Allocation and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="https://s.example.com"  # Optional
//! cargo run
//!
//! curl -X POST localhost:8000/ -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com/some/long/path"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AllocationError, AllocationService};
    pub use crate::domain::entities::ShortLink;
    pub use crate::domain::generator::IdGenerator;
    pub use crate::domain::repositories::ShortLinkStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryShortLinkStore;
    pub use crate::state::AppState;
    pub use crate::utils::id_generator::Sha256IdGenerator;
}
