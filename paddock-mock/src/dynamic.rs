use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;

use paddock_core::connector::{TelemetryConnector, WeatherProvider};
use paddock_core::{
    Driver, IntervalRecord, LapRecord, PaddockError, PositionRecord, RaceControlMessage, Session,
    SessionKey, WeatherSample,
};

/// Instruction for how a feed should behave.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value.
    Return(T),
    /// Fail with the provided error.
    Fail(PaddockError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

/// Upstream feed identifier used in the call log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feed {
    /// Session list for a year.
    Sessions,
    /// Driver identities.
    Drivers,
    /// Position observations.
    Positions,
    /// Lap timing.
    Laps,
    /// Intervals.
    Intervals,
    /// Race-control messages.
    RaceControl,
    /// Weather samples.
    Weather,
}

/// One recorded connector invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Feed that was requested.
    pub feed: Feed,
    /// Session key argument, absent for [`Feed::Sessions`].
    pub session: Option<SessionKey>,
    /// Year argument, present only for [`Feed::Sessions`].
    pub year: Option<i32>,
    /// When the call started, on the tokio clock.
    pub at: Instant,
}

#[derive(Default)]
struct InternalState {
    sessions: HashMap<i32, MockBehavior<Vec<Session>>>,
    drivers: Option<MockBehavior<Vec<Driver>>>,
    positions: Option<MockBehavior<Vec<PositionRecord>>>,
    laps: Option<MockBehavior<Vec<LapRecord>>>,
    intervals: Option<MockBehavior<Vec<IntervalRecord>>>,
    race_control: Option<MockBehavior<Vec<RaceControlMessage>>>,
    weather: Option<MockBehavior<Vec<WeatherSample>>>,
    latency: Duration,
    calls: Vec<Call>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
///
/// Feeds without a configured behavior answer with an empty array.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior of `sessions(year)`.
    pub async fn set_sessions(&self, year: i32, behavior: MockBehavior<Vec<Session>>) {
        self.state.lock().await.sessions.insert(year, behavior);
    }

    /// Set the behavior of `drivers`.
    pub async fn set_drivers(&self, behavior: MockBehavior<Vec<Driver>>) {
        self.state.lock().await.drivers = Some(behavior);
    }

    /// Set the behavior of `positions`.
    pub async fn set_positions(&self, behavior: MockBehavior<Vec<PositionRecord>>) {
        self.state.lock().await.positions = Some(behavior);
    }

    /// Set the behavior of `laps`.
    pub async fn set_laps(&self, behavior: MockBehavior<Vec<LapRecord>>) {
        self.state.lock().await.laps = Some(behavior);
    }

    /// Set the behavior of `intervals`.
    pub async fn set_intervals(&self, behavior: MockBehavior<Vec<IntervalRecord>>) {
        self.state.lock().await.intervals = Some(behavior);
    }

    /// Set the behavior of `race_control`.
    pub async fn set_race_control(&self, behavior: MockBehavior<Vec<RaceControlMessage>>) {
        self.state.lock().await.race_control = Some(behavior);
    }

    /// Set the behavior of `weather`.
    pub async fn set_weather(&self, behavior: MockBehavior<Vec<WeatherSample>>) {
        self.state.lock().await.weather = Some(behavior);
    }

    /// Delay every call by `latency` on the tokio clock before answering.
    pub async fn set_latency(&self, latency: Duration) {
        self.state.lock().await.latency = latency;
    }

    /// Return a copy of the call log, oldest first.
    pub async fn calls(&self) -> Vec<Call> {
        self.state.lock().await.calls.clone()
    }

    /// Number of calls made to one feed.
    pub async fn call_count(&self, feed: Feed) -> usize {
        let guard = self.state.lock().await;
        guard.calls.iter().filter(|c| c.feed == feed).count()
    }

    /// Feeds in the order they were requested.
    pub async fn feed_order(&self) -> Vec<Feed> {
        let guard = self.state.lock().await;
        guard.calls.iter().map(|c| c.feed).collect()
    }

    /// Forget all recorded calls, keeping behaviors.
    pub async fn clear_calls(&self) {
        self.state.lock().await.calls.clear();
    }

    /// Clear all configured behaviors and the call log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        *guard = InternalState::default();
    }
}

/// A connector that defers all behavior to an external controller.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn TelemetryConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn TelemetryConnector>, controller)
    }

    async fn answer<T, F>(
        &self,
        feed: Feed,
        session: Option<SessionKey>,
        year: Option<i32>,
        pick: F,
    ) -> Result<Vec<T>, PaddockError>
    where
        T: Send,
        F: FnOnce(&InternalState) -> Option<MockBehavior<Vec<T>>> + Send,
    {
        // Log and snapshot the behavior without holding the lock across awaits
        let (behavior, latency) = {
            let mut guard = self.state.lock().await;
            guard.calls.push(Call {
                feed,
                session,
                year,
                at: Instant::now(),
            });
            (pick(&guard), guard.latency)
        };

        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        match behavior {
            Some(MockBehavior::Return(v)) => Ok(v),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl TelemetryConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    async fn sessions(&self, year: i32) -> Result<Vec<Session>, PaddockError> {
        self.answer(Feed::Sessions, None, Some(year), |s| {
            s.sessions.get(&year).cloned()
        })
        .await
    }

    async fn drivers(&self, session: SessionKey) -> Result<Vec<Driver>, PaddockError> {
        self.answer(Feed::Drivers, Some(session), None, |s| s.drivers.clone())
            .await
    }

    async fn positions(&self, session: SessionKey) -> Result<Vec<PositionRecord>, PaddockError> {
        self.answer(Feed::Positions, Some(session), None, |s| {
            s.positions.clone()
        })
        .await
    }

    async fn laps(&self, session: SessionKey) -> Result<Vec<LapRecord>, PaddockError> {
        self.answer(Feed::Laps, Some(session), None, |s| s.laps.clone())
            .await
    }

    async fn intervals(&self, session: SessionKey) -> Result<Vec<IntervalRecord>, PaddockError> {
        self.answer(Feed::Intervals, Some(session), None, |s| {
            s.intervals.clone()
        })
        .await
    }

    async fn race_control(
        &self,
        session: SessionKey,
    ) -> Result<Vec<RaceControlMessage>, PaddockError> {
        self.answer(Feed::RaceControl, Some(session), None, |s| {
            s.race_control.clone()
        })
        .await
    }

    fn as_weather_provider(&self) -> Option<&dyn WeatherProvider> {
        Some(self as &dyn WeatherProvider)
    }
}

#[async_trait]
impl WeatherProvider for DynamicMockConnector {
    async fn weather(&self, session: SessionKey) -> Result<Vec<WeatherSample>, PaddockError> {
        self.answer(Feed::Weather, Some(session), None, |s| s.weather.clone())
            .await
    }
}
