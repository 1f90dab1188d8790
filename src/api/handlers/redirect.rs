//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::HeaderValue,
    response::{IntoResponse, Redirect},
};
use serde_json::json;
use std::borrow::Cow;
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its target URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// Targets are sent back exactly as stored. A target that is not a valid
/// header value, such as one with non-ASCII characters, is redirected to its
/// percent-encoded serialization instead.
///
/// # Errors
///
/// Returns 404 Not Found if the short id was never allocated.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let Some(target) = state.allocation_service.resolve(&short_id).await else {
        debug!(%short_id, "Unknown short id");
        return Err(AppError::not_found(
            format!("Short ID '{short_id}' not found"),
            json!({ "short_id": short_id }),
        ));
    };

    Ok(Redirect::temporary(&location_for(&target)))
}

fn location_for(target: &str) -> Cow<'_, str> {
    if HeaderValue::from_str(target).is_ok() {
        return Cow::Borrowed(target);
    }

    match Url::parse(target) {
        Ok(url) => Cow::Owned(url.into()),
        Err(_) => Cow::Borrowed(target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_keeps_ascii_target_verbatim() {
        assert_eq!(
            location_for("https://example.com/a b?q=1"),
            "https://example.com/a b?q=1"
        );
    }

    #[test]
    fn test_location_encodes_non_ascii_target() {
        assert_eq!(
            location_for("https://example.com/café"),
            "https://example.com/caf%C3%A9"
        );
        assert_eq!(
            location_for("https://bücher.example/"),
            "https://xn--bcher-kva.example/"
        );
    }
}
