//! paddock-openf1
//!
//! Public connector that implements `TelemetryConnector` on top of the OpenF1
//! REST API (`https://api.openf1.org/v1`). Every feed is a plain `GET` with a
//! `session_key` (or `year`) query parameter returning a JSON array.
//!
//! The connector never retries. Failures are classified into
//! `Timeout`, `RateLimited`, `UpstreamUnavailable` and `Unknown`; HTTP 404 is
//! how the API answers an empty result set and is returned as an empty list.
#![warn(missing_docs)]

mod builder;
/// Transport/HTTP error classification.
pub mod classify;

pub use builder::OpenF1ConnectorBuilder;

use async_trait::async_trait;
use paddock_core::connector::{TelemetryConnector, WeatherProvider};
use paddock_core::{
    Driver, IntervalRecord, LapRecord, PaddockError, PositionRecord, RaceControlMessage, Session,
    SessionKey, UpstreamConfig, WeatherSample,
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

/// Endpoint paths served by the upstream.
pub mod endpoints {
    /// Session list, queried by `year`.
    pub const SESSIONS: &str = "/sessions";
    /// Driver identities.
    pub const DRIVERS: &str = "/drivers";
    /// Position observations.
    pub const POSITION: &str = "/position";
    /// Lap timing.
    pub const LAPS: &str = "/laps";
    /// Intervals and gaps.
    pub const INTERVALS: &str = "/intervals";
    /// Race-control messages.
    pub const RACE_CONTROL: &str = "/race_control";
    /// Weather samples.
    pub const WEATHER: &str = "/weather";
}

/// OpenF1 connector backed by a shared `reqwest::Client`.
///
/// `reqwest::Client` is internally reference counted, so cloning the connector
/// is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct OpenF1Connector {
    http: reqwest::Client,
    base_url: Url,
    cfg: UpstreamConfig,
}

impl OpenF1Connector {
    /// Static connector name used in logs and error tags.
    pub const NAME: &'static str = "paddock-openf1";

    /// Returns a builder with the default configuration.
    #[must_use]
    pub fn builder() -> OpenF1ConnectorBuilder {
        OpenF1ConnectorBuilder::new()
    }

    /// Build with the default configuration.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the HTTP client cannot be constructed.
    pub fn new_default() -> Result<Self, PaddockError> {
        Self::builder().build()
    }

    /// Transport configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &UpstreamConfig {
        &self.cfg
    }

    fn url_for(&self, path: &str, query: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}{}", self.base_url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Issue one `GET` and decode the JSON array it returns.
    ///
    /// # Errors
    /// Returns a classified upstream error; see [`classify`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "paddock_openf1::fetch",
            skip(self, query),
            fields(endpoint = path),
            err,
        )
    )]
    pub async fn fetch<T>(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<T>, PaddockError>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(path, query);
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| classify::classify_transport(path, &e))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            #[cfg(feature = "tracing")]
            tracing::debug!(endpoint = path, "no results");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(classify::classify_status(path, status));
        }

        let rows: Vec<T> = resp
            .json()
            .await
            .map_err(|e| classify::classify_transport(path, &e))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(endpoint = path, records = rows.len(), "fetched");
        Ok(rows)
    }

    async fn session_feed<T>(&self, path: &str, session: SessionKey) -> Result<Vec<T>, PaddockError>
    where
        T: DeserializeOwned,
    {
        self.fetch(path, &[("session_key", session.to_string())])
            .await
    }
}

#[async_trait]
impl TelemetryConnector for OpenF1Connector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "OpenF1"
    }

    async fn sessions(&self, year: i32) -> Result<Vec<Session>, PaddockError> {
        self.fetch(endpoints::SESSIONS, &[("year", year.to_string())])
            .await
    }

    async fn drivers(&self, session: SessionKey) -> Result<Vec<Driver>, PaddockError> {
        self.session_feed(endpoints::DRIVERS, session).await
    }

    async fn positions(&self, session: SessionKey) -> Result<Vec<PositionRecord>, PaddockError> {
        self.session_feed(endpoints::POSITION, session).await
    }

    async fn laps(&self, session: SessionKey) -> Result<Vec<LapRecord>, PaddockError> {
        self.session_feed(endpoints::LAPS, session).await
    }

    async fn intervals(&self, session: SessionKey) -> Result<Vec<IntervalRecord>, PaddockError> {
        self.session_feed(endpoints::INTERVALS, session).await
    }

    async fn race_control(
        &self,
        session: SessionKey,
    ) -> Result<Vec<RaceControlMessage>, PaddockError> {
        self.session_feed(endpoints::RACE_CONTROL, session).await
    }

    fn as_weather_provider(&self) -> Option<&dyn WeatherProvider> {
        Some(self as &dyn WeatherProvider)
    }
}

#[async_trait]
impl WeatherProvider for OpenF1Connector {
    async fn weather(&self, session: SessionKey) -> Result<Vec<WeatherSample>, PaddockError> {
        self.session_feed(endpoints::WEATHER, session).await
    }
}
