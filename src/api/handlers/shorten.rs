//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::validate_target_url;

/// Allocates a short id for a long URL.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "short_id": "aZ3kQ1",
///   "short_url": "https://s.example.com/aZ3kQ1"
/// }
/// ```
///
/// `short_url` is omitted when no base URL is configured.
///
/// # Errors
///
/// - `422 Unprocessable Entity` if the body is not a JSON object with a
///   `url` string, or the URL is empty, malformed, not HTTP(S) or has no host
/// - `500 Internal Server Error` if every candidate id collided
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;
    validate_target_url(&payload.url)?;

    let link = state.allocation_service.allocate(&payload.url).await?;

    let short_url = state
        .base_url
        .as_deref()
        .map(|base_url| link.short_url(base_url));

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_id: link.id,
            short_url,
        }),
    ))
}
