use async_trait::async_trait;

use paddock_types::{
    Driver, IntervalRecord, LapRecord, PaddockError, PositionRecord, RaceControlMessage, Session,
    SessionKey, WeatherSample,
};

/// Focused role trait for connectors that publish trackside weather.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch all weather samples of a session.
    async fn weather(&self, session: SessionKey) -> Result<Vec<WeatherSample>, PaddockError>;
}

/// Main connector trait implemented by upstream crates.
///
/// Every method returns the raw, unordered record array of one feed. Connectors
/// do not retry; the caller decides whether a failure is fatal for the poll.
#[async_trait]
pub trait TelemetryConnector: Send + Sync {
    /// A stable identifier used in logs and error tags (e.g. "paddock-openf1").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Sessions of a championship year, in order of occurrence.
    async fn sessions(&self, year: i32) -> Result<Vec<Session>, PaddockError>;

    /// Driver identities of a session.
    async fn drivers(&self, session: SessionKey) -> Result<Vec<Driver>, PaddockError>;

    /// Position observations of a session.
    async fn positions(&self, session: SessionKey) -> Result<Vec<PositionRecord>, PaddockError>;

    /// Lap timing records of a session.
    async fn laps(&self, session: SessionKey) -> Result<Vec<LapRecord>, PaddockError>;

    /// Interval records of a session.
    async fn intervals(&self, session: SessionKey) -> Result<Vec<IntervalRecord>, PaddockError>;

    /// Race-control messages of a session.
    async fn race_control(
        &self,
        session: SessionKey,
    ) -> Result<Vec<RaceControlMessage>, PaddockError>;

    /// If implemented, returns a trait object for the weather feed.
    fn as_weather_provider(&self) -> Option<&dyn WeatherProvider> {
        None
    }
}
