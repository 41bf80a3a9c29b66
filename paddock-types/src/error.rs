use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the paddock workspace.
///
/// The first four variants classify upstream transport/HTTP failures. Their
/// `Display` output is the message shown to users in an error banner.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PaddockError {
    /// The transport deadline elapsed before the upstream answered.
    #[error("request timeout for {endpoint} - API might be slow")]
    Timeout {
        /// Endpoint path that timed out, e.g. "/laps".
        endpoint: String,
    },

    /// The upstream answered with HTTP 429.
    #[error("rate limit exceeded for {endpoint} - too many requests")]
    RateLimited {
        /// Endpoint path that was throttled.
        endpoint: String,
    },

    /// The upstream answered with a 5xx status.
    #[error("server error {status} for {endpoint} - API is down")]
    UpstreamUnavailable {
        /// Endpoint path that failed.
        endpoint: String,
        /// HTTP status code returned by the upstream.
        status: u16,
    },

    /// Any other transport, HTTP, or decoding failure.
    #[error("failed to fetch {endpoint}: {msg}")]
    Unknown {
        /// Endpoint path that failed.
        endpoint: String,
        /// Human-readable description of the failure.
        msg: String,
    },

    /// Invalid input argument or configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl PaddockError {
    /// Helper: build a `Timeout` error for an endpoint.
    pub fn timeout(endpoint: impl Into<String>) -> Self {
        Self::Timeout {
            endpoint: endpoint.into(),
        }
    }

    /// Helper: build a `RateLimited` error for an endpoint.
    pub fn rate_limited(endpoint: impl Into<String>) -> Self {
        Self::RateLimited {
            endpoint: endpoint.into(),
        }
    }

    /// Helper: build an `UpstreamUnavailable` error.
    pub fn upstream_unavailable(endpoint: impl Into<String>, status: u16) -> Self {
        Self::UpstreamUnavailable {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Helper: build an `Unknown` error with the endpoint and message.
    pub fn unknown(endpoint: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Unknown {
            endpoint: endpoint.into(),
            msg: msg.into(),
        }
    }

    /// Returns true if a later poll against the same upstream may succeed.
    ///
    /// Timeouts, throttling and 5xx answers are transient; decode
    /// failures and invalid arguments are not.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::RateLimited { .. } | Self::UpstreamUnavailable { .. }
        )
    }

    /// Endpoint path associated with an upstream failure, if any.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Timeout { endpoint }
            | Self::RateLimited { endpoint }
            | Self::UpstreamUnavailable { endpoint, .. }
            | Self::Unknown { endpoint, .. } => Some(endpoint),
            Self::InvalidArg(_) => None,
        }
    }
}
