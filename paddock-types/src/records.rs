//! Time-stamped feed records as published upstream.
//!
//! Every record is immutable once received. Feeds arrive unordered; ordering
//! is always derived from the timestamps carried here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::gap::Gap;
use crate::keys::DriverNumber;

/// A time-stamped rank observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRecord {
    /// Car the observation refers to.
    pub driver_number: DriverNumber,
    /// Observation time.
    pub date: DateTime<Utc>,
    /// Running position, 1-based.
    pub position: u32,
}

/// One lap timing record.
///
/// Several records may share a `lap_number` while sectors fill in during the
/// lap; `lap_duration` is only populated once the lap completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapRecord {
    /// Car the record refers to.
    pub driver_number: DriverNumber,
    /// Record time, when the feed publishes one.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Lap start time.
    #[serde(default)]
    pub date_start: Option<DateTime<Utc>>,
    /// Lap number, 1-based.
    #[serde(default)]
    pub lap_number: u32,
    /// Completed lap time in seconds.
    #[serde(default)]
    pub lap_duration: Option<f64>,
    /// Sector 1 time in seconds.
    #[serde(default)]
    pub duration_sector_1: Option<f64>,
    /// Sector 2 time in seconds.
    #[serde(default)]
    pub duration_sector_2: Option<f64>,
    /// Sector 3 time in seconds.
    #[serde(default)]
    pub duration_sector_3: Option<f64>,
    /// Intermediate 1 speed in km/h.
    #[serde(default)]
    pub i1_speed: Option<f64>,
    /// Intermediate 2 speed in km/h.
    #[serde(default)]
    pub i2_speed: Option<f64>,
    /// Speed trap in km/h.
    #[serde(default)]
    pub st_speed: Option<f64>,
    /// Whether the lap started from the pit exit.
    #[serde(default)]
    pub is_pit_out_lap: Option<bool>,
}

impl LapRecord {
    /// Record timestamp: `date` when published, else `date_start`.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.date.or(self.date_start)
    }

    /// Lap duration if present and strictly positive.
    #[must_use]
    pub fn valid_duration(&self) -> Option<f64> {
        self.lap_duration.filter(|d| *d > 0.0)
    }
}

/// Gap to the car ahead and to the leader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalRecord {
    /// Car the record refers to.
    pub driver_number: DriverNumber,
    /// Record time.
    pub date: DateTime<Utc>,
    /// Gap to the car immediately ahead; null for the leader.
    #[serde(default)]
    pub interval: Option<Gap>,
    /// Gap to the leader.
    #[serde(default)]
    pub gap_to_leader: Option<Gap>,
}

/// Track-status event published by race control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceControlMessage {
    /// Publication time.
    pub date: DateTime<Utc>,
    /// Category, e.g. "Flag", "SafetyCar", "Drs", "Other".
    #[serde(default)]
    pub category: String,
    /// Flag shown, e.g. "YELLOW", "DOUBLE YELLOW", "CHEQUERED".
    #[serde(default)]
    pub flag: Option<String>,
    /// Scope of the flag, e.g. "Track", "Sector", "Driver".
    #[serde(default)]
    pub scope: Option<String>,
    /// Sector the message applies to.
    #[serde(default)]
    pub sector: Option<u32>,
    /// Free-form message text.
    #[serde(default)]
    pub message: String,
    /// Driver the message targets, if any.
    #[serde(default)]
    pub driver_number: Option<DriverNumber>,
    /// Lap the message was published on.
    #[serde(default)]
    pub lap_number: Option<u32>,
}

/// Trackside weather sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Sample time.
    pub date: DateTime<Utc>,
    /// Air temperature in °C.
    #[serde(default)]
    pub air_temperature: Option<f64>,
    /// Track temperature in °C.
    #[serde(default)]
    pub track_temperature: Option<f64>,
    /// Relative humidity in %.
    #[serde(default)]
    pub humidity: Option<f64>,
    /// Air pressure in mbar.
    #[serde(default)]
    pub pressure: Option<f64>,
    /// Non-zero when it is raining.
    #[serde(default)]
    pub rainfall: Option<f64>,
    /// Wind direction in degrees, 0-359.
    #[serde(default)]
    pub wind_direction: Option<f64>,
    /// Wind speed in m/s.
    #[serde(default)]
    pub wind_speed: Option<f64>,
}

impl WeatherSample {
    /// True when the sample reports rainfall.
    #[must_use]
    pub fn is_wet(&self) -> bool {
        self.rainfall.is_some_and(|r| r > 0.0)
    }
}
