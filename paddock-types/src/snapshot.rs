//! Snapshot envelope and derived projection rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PaddockError;
use crate::gap::GapReading;
use crate::records::{IntervalRecord, LapRecord, PositionRecord, RaceControlMessage, WeatherSample};
use crate::session::{Driver, Session};

/// One consistent set of feeds fetched during a single poll.
///
/// `session == None` is the "no active event" state, not a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Resolved session, if any.
    pub session: Option<Session>,
    /// Driver identities.
    pub drivers: Vec<Driver>,
    /// Position observations.
    pub positions: Vec<PositionRecord>,
    /// Lap timing records.
    pub laps: Vec<LapRecord>,
    /// Interval records.
    pub intervals: Vec<IntervalRecord>,
    /// Race-control messages, possibly served from cache.
    pub race_control: Vec<RaceControlMessage>,
    /// Latest weather sample, if fetched.
    pub weather: Option<WeatherSample>,
    /// When the poll completed.
    pub fetched_at: DateTime<Utc>,
    /// Non-fatal issues absorbed while building the snapshot.
    pub warnings: Vec<PaddockError>,
}

impl Snapshot {
    /// Snapshot with no session and no feed data.
    #[must_use]
    pub const fn empty(fetched_at: DateTime<Utc>) -> Self {
        Self {
            session: None,
            drivers: Vec::new(),
            positions: Vec::new(),
            laps: Vec::new(),
            intervals: Vec::new(),
            race_control: Vec::new(),
            weather: None,
            fetched_at,
            warnings: Vec::new(),
        }
    }

    /// True when no session could be resolved.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.session.is_none()
    }
}

/// The three sector times of one lap record, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectorTimes {
    /// Sector 1.
    pub s1: Option<f64>,
    /// Sector 2.
    pub s2: Option<f64>,
    /// Sector 3.
    pub s3: Option<f64>,
}

impl SectorTimes {
    /// All three sectors absent.
    pub const NONE: Self = Self {
        s1: None,
        s2: None,
        s3: None,
    };
}

/// Speed-trap readings of one lap record, in km/h.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpeedTraps {
    /// Intermediate 1.
    pub i1: Option<f64>,
    /// Intermediate 2.
    pub i2: Option<f64>,
    /// Speed trap.
    pub st: Option<f64>,
}

/// Present-tense state of one driver, derived from the raw feeds.
///
/// Recomputed from scratch for every snapshot. Absent values are `None` or
/// [`GapReading::NoData`]; only `lap_count` defaults to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverProjection {
    /// Driver identity.
    pub driver: Driver,
    /// Latest known running position.
    pub position: Option<u32>,
    /// Highest lap number seen.
    pub lap_count: u32,
    /// Most recent completed lap time in seconds.
    pub last_lap: Option<f64>,
    /// Fastest completed lap time in seconds.
    pub best_lap: Option<f64>,
    /// Sectors of the current lap.
    pub live_sectors: SectorTimes,
    /// Sectors of the previous lap.
    pub previous_sectors: SectorTimes,
    /// Speed traps of the current lap.
    pub speed_traps: SpeedTraps,
    /// Gap to the car ahead.
    pub interval: GapReading,
    /// Gap to the leader.
    pub gap_to_leader: GapReading,
}
