use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::app::AppState;
use crate::error::ApiError;

/// Header carrying the shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects any request whose `X-API-Key` header does not exactly match the
/// configured secret. Matching requests pass through unmodified.
pub async fn api_key_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !key_matches(request.headers(), &state.api_key) {
        tracing::warn!(
            "Rejected {} {}: missing or invalid API key",
            request.method(),
            request.uri().path()
        );
        return Err(ApiError::unauthorized("Unauthorized"));
    }

    Ok(next.run(request).await)
}

/// Exact byte comparison; a missing or non-UTF-8 header never matches
fn key_matches(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |presented| !expected.is_empty() && presented == expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(key: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(key).unwrap());
        headers
    }

    #[test]
    fn accepts_exact_match() {
        assert!(key_matches(&headers_with("s3cret"), "s3cret"));
    }

    #[test]
    fn rejects_mismatch_and_case_changes() {
        assert!(!key_matches(&headers_with("S3CRET"), "s3cret"));
        assert!(!key_matches(&headers_with("s3cret "), "s3cret"));
    }

    #[test]
    fn rejects_missing_header() {
        assert!(!key_matches(&HeaderMap::new(), "s3cret"));
    }

    #[test]
    fn empty_secret_matches_nothing() {
        assert!(!key_matches(&headers_with(""), ""));
    }
}
