//! Mapping of transport and HTTP failures onto [`PaddockError`].

use paddock_core::PaddockError;
use reqwest::StatusCode;

/// Classify a non-success HTTP status.
///
/// - 429 → `RateLimited`
/// - 5xx → `UpstreamUnavailable`
/// - anything else → `Unknown`
#[must_use]
pub fn classify_status(endpoint: &str, status: StatusCode) -> PaddockError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        PaddockError::rate_limited(endpoint)
    } else if status.is_server_error() {
        PaddockError::upstream_unavailable(endpoint, status.as_u16())
    } else {
        PaddockError::unknown(endpoint, format!("unexpected status {status}"))
    }
}

/// Classify a transport, status, or decoding error raised by `reqwest`.
#[must_use]
pub fn classify_transport(endpoint: &str, err: &reqwest::Error) -> PaddockError {
    if err.is_timeout() {
        return PaddockError::timeout(endpoint);
    }
    if let Some(status) = err.status() {
        return classify_status(endpoint, status);
    }
    if err.is_decode() {
        return PaddockError::unknown(endpoint, format!("malformed response body: {err}"));
    }
    PaddockError::unknown(endpoint, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes() {
        assert_eq!(
            classify_status("/laps", StatusCode::TOO_MANY_REQUESTS),
            PaddockError::rate_limited("/laps")
        );
        assert_eq!(
            classify_status("/laps", StatusCode::BAD_GATEWAY),
            PaddockError::upstream_unavailable("/laps", 502)
        );
        assert!(matches!(
            classify_status("/laps", StatusCode::FORBIDDEN),
            PaddockError::Unknown { .. }
        ));
    }
}
