//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// Target URL. Scheme and host are checked by the handler.
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,
}

/// Response for a newly allocated short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_id: String,

    /// Absolute short URL, present only when a public base URL is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
}
