//! Configuration types shared by the connector and the orchestrator.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default upstream base URL.
pub const OPENF1_BASE_URL: &str = "https://api.openf1.org/v1";

/// Transport settings for the upstream client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,
    /// Per-request deadline.
    pub timeout: Duration,
    /// Value of the `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: OPENF1_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("paddock/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Polling and request-pacing settings for the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollConfig {
    /// Pause inserted between consecutive upstream calls within one poll.
    pub request_delay: Duration,
    /// Period of automatic polls.
    pub poll_interval: Duration,
    /// Race control is re-fetched on every Nth poll; must be at least 1.
    pub race_control_every: u64,
    /// Whether each poll also fetches the weather feed.
    pub fetch_weather: bool,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            request_delay: Duration::from_millis(150),
            poll_interval: Duration::from_secs(10),
            race_control_every: 3,
            fetch_weather: true,
        }
    }
}
