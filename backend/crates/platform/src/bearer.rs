//! Bearer Token Extraction
//!
//! Common handling for the `Authorization: Bearer <token>` header scheme.

use axum::http::{HeaderMap, header};

/// Literal scheme prefix, case-sensitive
pub const BEARER_PREFIX: &str = "Bearer ";

/// Read the raw `Authorization` header value, if it is valid UTF-8
pub fn raw_authorization(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::AUTHORIZATION)?.to_str().ok()
}

/// Extract the bearer token from an `Authorization` header value
///
/// Returns `None` when the value does not carry the `Bearer ` scheme
/// or holds only whitespace after the scheme.
pub fn token_from_value(value: &str) -> Option<&str> {
    let token = value.strip_prefix(BEARER_PREFIX)?.trim();

    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_raw_authorization() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc"),
        );
        assert_eq!(raw_authorization(&headers), Some("Bearer abc"));

        assert_eq!(raw_authorization(&HeaderMap::new()), None);
    }

    #[test]
    fn test_token_from_value() {
        assert_eq!(token_from_value("Bearer abc.123.xyz"), Some("abc.123.xyz"));
    }

    #[test]
    fn test_token_trims_whitespace() {
        assert_eq!(token_from_value("Bearer   token  "), Some("token"));
    }

    #[test]
    fn test_wrong_scheme() {
        assert_eq!(token_from_value("Basic dXNlcjpwYXNz"), None);
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        assert_eq!(token_from_value("bearer token"), None);
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(token_from_value("Bearer "), None);
        assert_eq!(token_from_value("Bearer    "), None);
        assert_eq!(token_from_value("Bearer"), None);
    }
}
