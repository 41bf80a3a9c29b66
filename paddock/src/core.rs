use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Mutex;

use paddock_core::{
    DriverProjection, PaddockError, PollConfig, Session, SessionKey, Snapshot, TelemetryConnector,
    WeatherSample, latest_weather, project_snapshot,
};

use crate::race_control::{CacheOutcome, RaceControlCache};
use crate::session::{resolve_current_session, resolve_for_year};

/// Orchestrator that assembles snapshots from one telemetry connector.
///
/// Owns the race-control cache. Polls are serialized: the cache lives behind an
/// async mutex held for the whole poll, so two polls never interleave their
/// request sequences or race on the cache counter.
pub struct Paddock {
    pub(crate) connector: Arc<dyn TelemetryConnector>,
    pub(crate) cfg: PollConfig,
    season: Option<i32>,
    race_control: Mutex<RaceControlCache>,
}

/// Builder for constructing a [`Paddock`] with custom pacing.
pub struct PaddockBuilder {
    connector: Option<Arc<dyn TelemetryConnector>>,
    cfg: PollConfig,
    season: Option<i32>,
}

impl Default for PaddockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PaddockBuilder {
    /// Create a new builder with the default [`PollConfig`].
    ///
    /// Starts with no connector; one must be set via [`with_connector`](Self::with_connector).
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: PollConfig::default(),
            season: None,
        }
    }

    /// Set the upstream connector. A later call replaces an earlier one.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn TelemetryConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Replace the whole polling configuration.
    #[must_use]
    pub fn config(mut self, cfg: PollConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Pause inserted between consecutive upstream calls of one poll.
    ///
    /// The upstream is rate limited; spacing calls out trades snapshot latency
    /// for fewer 429 answers.
    #[must_use]
    pub const fn request_delay(mut self, delay: Duration) -> Self {
        self.cfg.request_delay = delay;
        self
    }

    /// Interval used by [`Poller`](crate::Poller) for automatic polls.
    #[must_use]
    pub const fn poll_interval(mut self, interval: Duration) -> Self {
        self.cfg.poll_interval = interval;
        self
    }

    /// Re-fetch race control on every `every`th poll.
    #[must_use]
    pub const fn race_control_every(mut self, every: u64) -> Self {
        self.cfg.race_control_every = every;
        self
    }

    /// Toggle the optional weather fetch at the end of each poll.
    #[must_use]
    pub const fn fetch_weather(mut self, yes: bool) -> Self {
        self.cfg.fetch_weather = yes;
        self
    }

    /// Follow the sessions of a fixed championship year instead of the
    /// current one. The previous-year fallback still applies.
    #[must_use]
    pub const fn season(mut self, year: i32) -> Self {
        self.season = Some(year);
        self
    }

    /// Build the `Paddock` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector was set, `race_control_every` is
    /// zero, or `poll_interval` is zero.
    pub fn build(self) -> Result<Paddock, PaddockError> {
        let Some(connector) = self.connector else {
            return Err(PaddockError::InvalidArg(
                "a telemetry connector is required".to_string(),
            ));
        };
        if self.cfg.race_control_every == 0 {
            return Err(PaddockError::InvalidArg(
                "race_control_every must be at least 1".to_string(),
            ));
        }
        if self.cfg.poll_interval.is_zero() {
            return Err(PaddockError::InvalidArg(
                "poll_interval must be non-zero".to_string(),
            ));
        }
        Ok(Paddock {
            connector,
            season: self.season,
            race_control: Mutex::new(RaceControlCache::new(self.cfg.race_control_every)),
            cfg: self.cfg,
        })
    }
}

impl Paddock {
    /// Start building a new `Paddock` instance.
    #[must_use]
    pub fn builder() -> PaddockBuilder {
        PaddockBuilder::new()
    }

    /// Polling configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &PollConfig {
        &self.cfg
    }

    /// The connector this orchestrator polls.
    #[must_use]
    pub fn connector(&self) -> &Arc<dyn TelemetryConnector> {
        &self.connector
    }

    /// Resolve the session a live client should follow.
    ///
    /// Uses the pinned season when one was configured, else the current year.
    ///
    /// # Errors
    /// Propagates the connector's error.
    pub async fn current_session(&self) -> Result<Option<Session>, PaddockError> {
        match self.season {
            Some(year) => resolve_for_year(self.connector.as_ref(), year).await,
            None => resolve_current_session(self.connector.as_ref()).await,
        }
    }

    /// Run one poll, waiting for any poll already in flight to finish first.
    ///
    /// This is the manual-refresh path: a request made while a timer poll is
    /// running is coalesced behind it rather than dropped.
    ///
    /// # Errors
    /// Returns the first error of a required feed (sessions, drivers,
    /// positions, laps, intervals); the remaining calls are not issued.
    pub async fn snapshot(&self, force_race_control: bool) -> Result<Snapshot, PaddockError> {
        let mut cache = self.race_control.lock().await;
        self.poll(&mut cache, force_race_control).await
    }

    /// Run one poll unless another is already in flight.
    ///
    /// Returns `None` when a poll is running; this is the timer path, which
    /// skips the tick instead of queueing it.
    pub async fn try_snapshot(
        &self,
        force_race_control: bool,
    ) -> Option<Result<Snapshot, PaddockError>> {
        let Ok(mut cache) = self.race_control.try_lock() else {
            #[cfg(feature = "tracing")]
            tracing::debug!("poll already in flight, skipping");
            return None;
        };
        Some(self.poll(&mut cache, force_race_control).await)
    }

    /// Poll and project in one step.
    ///
    /// # Errors
    /// Same as [`snapshot`](Self::snapshot).
    pub async fn standings(
        &self,
        force_race_control: bool,
    ) -> Result<(Snapshot, Vec<DriverProjection>), PaddockError> {
        let snapshot = self.snapshot(force_race_control).await?;
        let rows = project_snapshot(&snapshot);
        Ok((snapshot, rows))
    }

    async fn pause(&self) {
        if !self.cfg.request_delay.is_zero() {
            tokio::time::sleep(self.cfg.request_delay).await;
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "paddock::core::poll",
            skip(self, cache),
            fields(
                connector = self.connector.name(),
                delay_ms = u64::try_from(self.cfg.request_delay.as_millis()).unwrap_or(u64::MAX),
            ),
            err,
        )
    )]
    async fn poll(
        &self,
        cache: &mut RaceControlCache,
        force_race_control: bool,
    ) -> Result<Snapshot, PaddockError> {
        #[cfg(feature = "tracing")]
        let started = tokio::time::Instant::now();

        let Some(session) = self.current_session().await? else {
            #[cfg(feature = "tracing")]
            tracing::info!("no session available, returning empty snapshot");
            return Ok(Snapshot::empty(Utc::now()));
        };
        let key = session.session_key;
        let c = self.connector.as_ref();

        self.pause().await;
        let drivers = c.drivers(key).await?;
        self.pause().await;
        let positions = c.positions(key).await?;
        self.pause().await;
        let laps = c.laps(key).await?;
        self.pause().await;
        let intervals = c.intervals(key).await?;
        self.pause().await;

        let mut warnings = Vec::new();
        let rc = cache.read(c, key, force_race_control).await;
        if let CacheOutcome::Stale(e) = rc.outcome {
            warnings.push(e);
        }

        let weather = if self.cfg.fetch_weather {
            self.weather(key, &mut warnings).await
        } else {
            None
        };

        #[cfg(feature = "tracing")]
        tracing::info!(
            session = %key,
            drivers = drivers.len(),
            positions = positions.len(),
            laps = laps.len(),
            intervals = intervals.len(),
            race_control = rc.messages.len(),
            warnings = warnings.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "poll complete"
        );

        Ok(Snapshot {
            session: Some(session),
            drivers,
            positions,
            laps,
            intervals,
            race_control: rc.messages,
            weather,
            fetched_at: Utc::now(),
            warnings,
        })
    }

    async fn weather(
        &self,
        key: SessionKey,
        warnings: &mut Vec<PaddockError>,
    ) -> Option<WeatherSample> {
        let provider = self.connector.as_weather_provider()?;
        self.pause().await;
        match provider.weather(key).await {
            Ok(samples) => latest_weather(&samples).cloned(),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %e, "weather fetch failed");
                warnings.push(e);
                None
            }
        }
    }
}
