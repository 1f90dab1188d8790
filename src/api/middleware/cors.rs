//! Cross-origin resource sharing layer.

use tower_http::cors::{Any, CorsLayer};

/// Creates a permissive CORS layer.
///
/// Any origin, method and header is accepted so browser clients on other
/// origins can create and follow short links.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
