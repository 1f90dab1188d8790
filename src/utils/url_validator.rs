//! Syntactic validation of target URLs.
//!
//! Targets are stored exactly as submitted, so validation never rewrites the
//! input. It only rejects strings the redirect endpoint could not safely send
//! a client to.

use url::Url;

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must contain a valid domain")]
    MissingHost,
}

/// Checks that `input` is an absolute `http` or `https` URL with a host.
///
/// # Errors
///
/// - [`UrlValidationError::InvalidFormat`] for anything `url` cannot parse,
///   including empty input and relative references such as `example.com`,
///   and for input carrying control characters or surrounding whitespace
/// - [`UrlValidationError::UnsupportedProtocol`] for `ftp:`, `javascript:`,
///   `data:` and every other non-HTTP scheme
/// - [`UrlValidationError::MissingHost`] when the host is empty
///
/// # Examples
///
/// ```ignore
/// assert!(validate_target_url("https://example.com/some/long/path").is_ok());
/// assert!(validate_target_url("ftp://example.com").is_err());
/// ```
pub fn validate_target_url(input: &str) -> Result<(), UrlValidationError> {
    // `Url::parse` silently drops these, but the raw input is what gets
    // stored and later sent back in a `Location` header.
    if input.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlValidationError::InvalidFormat(
            "URL contains control characters".to_string(),
        ));
    }

    if input.trim() != input {
        return Err(UrlValidationError::InvalidFormat(
            "URL has leading or trailing whitespace".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_simple_http() {
        assert!(validate_target_url("http://example.com").is_ok());
    }

    #[test]
    fn test_validate_simple_https() {
        assert!(validate_target_url("https://example.com/some/long/path").is_ok());
    }

    #[test]
    fn test_validate_with_query_and_fragment() {
        assert!(validate_target_url("https://example.com/page?key=value#section").is_ok());
    }

    #[test]
    fn test_validate_custom_port() {
        assert!(validate_target_url("http://localhost:3000/test").is_ok());
    }

    #[test]
    fn test_validate_ip_address() {
        assert!(validate_target_url("http://192.168.1.1:8080/api").is_ok());
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(matches!(
            validate_target_url(""),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_rejects_embedded_newline() {
        assert!(matches!(
            validate_target_url("https://example.com/a\nb"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_rejects_embedded_tab_and_carriage_return() {
        assert!(validate_target_url("https://example.com/a\tb").is_err());
        assert!(validate_target_url("https://example.com/a\r\nSet-Cookie: x=1").is_err());
        assert!(validate_target_url("https://exa\u{7f}mple.com").is_err());
    }

    #[test]
    fn test_validate_rejects_surrounding_whitespace() {
        assert!(validate_target_url(" https://example.com").is_err());
        assert!(validate_target_url("https://example.com ").is_err());
        assert!(validate_target_url("\u{0}https://example.com").is_err());
    }

    #[test]
    fn test_validate_allows_percent_encoded_whitespace() {
        assert!(validate_target_url("https://example.com/a%0Ab?q=a%20b").is_ok());
    }

    #[test]
    fn test_validate_not_a_url() {
        assert!(matches!(
            validate_target_url("not-a-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_missing_scheme() {
        assert!(matches!(
            validate_target_url("example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_ftp_protocol() {
        assert!(matches!(
            validate_target_url("ftp://example.com"),
            Err(UrlValidationError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_validate_javascript_protocol() {
        assert!(matches!(
            validate_target_url("javascript:alert('xss')"),
            Err(UrlValidationError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_validate_mailto_protocol() {
        assert!(matches!(
            validate_target_url("mailto:test@example.com"),
            Err(UrlValidationError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_validate_scheme_without_host() {
        assert!(validate_target_url("http://").is_err());
    }

    #[test]
    fn test_validate_error_message() {
        let err = validate_target_url("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("HTTP and HTTPS"));
    }
}
