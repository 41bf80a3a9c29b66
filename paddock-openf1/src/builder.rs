use std::time::Duration;

use paddock_core::{PaddockError, UpstreamConfig};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use url::Url;

use crate::OpenF1Connector;

/// Builder for [`OpenF1Connector`].
///
/// Defaults: the public OpenF1 endpoint, a 10 second per-request timeout and
/// a `paddock/<version>` user agent.
#[derive(Debug, Clone, Default)]
pub struct OpenF1ConnectorBuilder {
    cfg: UpstreamConfig,
}

impl OpenF1ConnectorBuilder {
    /// Start from the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole transport configuration.
    #[must_use]
    pub fn config(mut self, cfg: UpstreamConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Point the connector at another base URL (mirrors, local test servers).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.cfg.base_url = url.into();
        self
    }

    /// Set the per-request deadline.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.cfg.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.cfg.user_agent = ua.into();
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the base URL does not parse, the timeout is zero,
    /// or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<OpenF1Connector, PaddockError> {
        let base = self.cfg.base_url.trim_end_matches('/');
        let base_url = Url::parse(base)
            .map_err(|e| PaddockError::InvalidArg(format!("invalid base url {base:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(PaddockError::InvalidArg(format!(
                "base url cannot carry paths: {base:?}"
            )));
        }
        if self.cfg.timeout.is_zero() {
            return Err(PaddockError::InvalidArg(
                "request timeout must be non-zero".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .timeout(self.cfg.timeout)
            .user_agent(self.cfg.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| PaddockError::InvalidArg(format!("http client: {e}")))?;

        Ok(OpenF1Connector {
            http,
            base_url,
            cfg: self.cfg,
        })
    }
}
