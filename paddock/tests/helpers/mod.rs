// Shared fixtures for paddock integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Datelike, TimeDelta, Utc};
use paddock::{Paddock, PaddockError, Session, SessionKey, TelemetryConnector};
use paddock_core::{
    Driver, DriverNumber, Gap, IntervalRecord, LapRecord, PositionRecord, RaceControlMessage,
};
use paddock_mock::{DynamicMockConnector, DynamicMockController, MockBehavior};

pub const KEY: SessionKey = SessionKey(9472);

pub fn this_year() -> i32 {
    Utc::now().year()
}

pub fn t(secs: i64) -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + TimeDelta::seconds(1_709_391_600 + secs)
}

pub fn session(key: SessionKey, name: &str) -> Session {
    Session {
        session_key: key,
        session_name: name.to_string(),
        session_type: Some(name.to_string()),
        meeting_key: None,
        location: None,
        country_name: None,
        circuit_short_name: None,
        year: this_year(),
        date_start: None,
        date_end: None,
        gmt_offset: None,
    }
}

pub fn driver(n: u32) -> Driver {
    Driver::numbered(DriverNumber(n))
}

pub fn pos(n: u32, secs: i64, position: u32) -> PositionRecord {
    PositionRecord {
        driver_number: DriverNumber(n),
        date: t(secs),
        position,
    }
}

pub fn lap(n: u32, lap_number: u32, secs: i64, duration: Option<f64>) -> LapRecord {
    LapRecord {
        driver_number: DriverNumber(n),
        date: None,
        date_start: Some(t(secs)),
        lap_number,
        lap_duration: duration,
        duration_sector_1: None,
        duration_sector_2: None,
        duration_sector_3: None,
        i1_speed: None,
        i2_speed: None,
        st_speed: None,
        is_pit_out_lap: None,
    }
}

pub fn interval(n: u32, secs: i64, gap: Option<f64>) -> IntervalRecord {
    IntervalRecord {
        driver_number: DriverNumber(n),
        date: t(secs),
        interval: gap.map(Gap::Seconds),
        gap_to_leader: gap.map(Gap::Seconds),
    }
}

pub fn rc(secs: i64, message: &str) -> RaceControlMessage {
    RaceControlMessage {
        date: t(secs),
        category: "Other".to_string(),
        flag: None,
        scope: None,
        sector: None,
        message: message.to_string(),
        driver_number: None,
        lap_number: None,
    }
}

/// Dynamic mock primed with a current-year session and a two-car race.
pub async fn primed_mock() -> (Arc<dyn TelemetryConnector>, DynamicMockController) {
    let (mock, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_sessions(
        this_year(),
        MockBehavior::Return(vec![session(SessionKey(1), "Practice 1"), session(KEY, "Race")]),
    )
    .await;
    ctl.set_drivers(MockBehavior::Return(vec![driver(1), driver(44)]))
        .await;
    ctl.set_positions(MockBehavior::Return(vec![pos(1, 10, 1), pos(44, 10, 2)]))
        .await;
    ctl.set_laps(MockBehavior::Return(vec![
        lap(1, 1, 0, None),
        lap(1, 2, 95, Some(94.8)),
        lap(44, 1, 0, None),
    ]))
    .await;
    ctl.set_intervals(MockBehavior::Return(vec![
        interval(1, 20, None),
        interval(44, 20, Some(1.25)),
    ]))
    .await;
    ctl.set_race_control(MockBehavior::Return(vec![rc(0, "RACE START")]))
        .await;
    (mock, ctl)
}

pub fn paddock_with(connector: Arc<dyn TelemetryConnector>, delay: Duration) -> Paddock {
    Paddock::builder()
        .with_connector(connector)
        .request_delay(delay)
        .build()
        .expect("paddock builds")
}

/// Wraps a connector and hides its weather capability.
pub struct WithoutWeather(pub Arc<dyn TelemetryConnector>);

#[async_trait::async_trait]
impl TelemetryConnector for WithoutWeather {
    fn name(&self) -> &'static str {
        "without-weather"
    }

    async fn sessions(&self, year: i32) -> Result<Vec<Session>, PaddockError> {
        self.0.sessions(year).await
    }

    async fn drivers(&self, session: SessionKey) -> Result<Vec<Driver>, PaddockError> {
        self.0.drivers(session).await
    }

    async fn positions(&self, session: SessionKey) -> Result<Vec<PositionRecord>, PaddockError> {
        self.0.positions(session).await
    }

    async fn laps(&self, session: SessionKey) -> Result<Vec<LapRecord>, PaddockError> {
        self.0.laps(session).await
    }

    async fn intervals(&self, session: SessionKey) -> Result<Vec<IntervalRecord>, PaddockError> {
        self.0.intervals(session).await
    }

    async fn race_control(
        &self,
        session: SessionKey,
    ) -> Result<Vec<RaceControlMessage>, PaddockError> {
        self.0.race_control(session).await
    }
}
