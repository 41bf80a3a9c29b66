//! paddock-mock
//!
//! Deterministic connectors for tests and examples.
//!
//! - [`MockConnector`]: a static, five-car fixture of the 2024 Bahrain race
//!   weekend with every feed populated.
//! - [`DynamicMockConnector`]: per-feed behavior scripted from a
//!   [`DynamicMockController`], with a call log for asserting request order.
#![warn(missing_docs)]

use async_trait::async_trait;
use paddock_core::connector::{TelemetryConnector, WeatherProvider};
use paddock_core::{
    Driver, IntervalRecord, LapRecord, PaddockError, PositionRecord, RaceControlMessage, Session,
    SessionKey, WeatherSample,
};

mod dynamic;
mod fixtures;

pub use dynamic::{Call, DynamicMockConnector, DynamicMockController, Feed, MockBehavior};

/// Session keys served by [`MockConnector`].
pub mod sessions {
    pub use crate::fixtures::sessions::{PRACTICE_1, PREVIOUS_SEASON_FINALE, QUALIFYING, RACE};
}

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
///
/// Every session key of the 2024 fixture weekend returns the same race feeds.
/// [`MockConnector::FAIL_SESSION`] and [`MockConnector::TIMEOUT_SESSION`] fail
/// every per-session feed; any other unknown key answers with empty arrays,
/// the way the upstream does.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Session key whose feeds all fail with `UpstreamUnavailable`.
    pub const FAIL_SESSION: SessionKey = SessionKey(500);
    /// Session key whose feeds all fail with `Timeout`.
    pub const TIMEOUT_SESSION: SessionKey = SessionKey(408);

    /// Create the connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn is_fixture(session: SessionKey) -> bool {
        fixtures::sessions::by_year(2024)
            .iter()
            .any(|s| s.session_key == session)
    }

    fn serve<T>(
        session: SessionKey,
        endpoint: &'static str,
        data: impl FnOnce() -> Vec<T>,
    ) -> Result<Vec<T>, PaddockError> {
        match session {
            Self::FAIL_SESSION => Err(PaddockError::upstream_unavailable(endpoint, 503)),
            Self::TIMEOUT_SESSION => Err(PaddockError::timeout(endpoint)),
            s if Self::is_fixture(s) => Ok(data()),
            _ => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl TelemetryConnector for MockConnector {
    fn name(&self) -> &'static str {
        "paddock-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn sessions(&self, year: i32) -> Result<Vec<Session>, PaddockError> {
        Ok(fixtures::sessions::by_year(year))
    }

    async fn drivers(&self, session: SessionKey) -> Result<Vec<Driver>, PaddockError> {
        Self::serve(session, "/drivers", fixtures::sessions::drivers)
    }

    async fn positions(&self, session: SessionKey) -> Result<Vec<PositionRecord>, PaddockError> {
        Self::serve(session, "/position", fixtures::timing::positions)
    }

    async fn laps(&self, session: SessionKey) -> Result<Vec<LapRecord>, PaddockError> {
        Self::serve(session, "/laps", fixtures::timing::laps)
    }

    async fn intervals(&self, session: SessionKey) -> Result<Vec<IntervalRecord>, PaddockError> {
        Self::serve(session, "/intervals", fixtures::timing::intervals)
    }

    async fn race_control(
        &self,
        session: SessionKey,
    ) -> Result<Vec<RaceControlMessage>, PaddockError> {
        Self::serve(session, "/race_control", fixtures::race_control::messages)
    }

    fn as_weather_provider(&self) -> Option<&dyn WeatherProvider> {
        Some(self as &dyn WeatherProvider)
    }
}

#[async_trait]
impl WeatherProvider for MockConnector {
    async fn weather(&self, session: SessionKey) -> Result<Vec<WeatherSample>, PaddockError> {
        Self::serve(session, "/weather", fixtures::race_control::weather)
    }
}
