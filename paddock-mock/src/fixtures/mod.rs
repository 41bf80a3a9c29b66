pub mod race_control;
pub mod sessions;
pub mod timing;

use chrono::{DateTime, TimeDelta, Utc};

/// 2024-03-02T15:00:00Z, lights out of the fixture race.
const RACE_START_EPOCH: i64 = 1_709_391_600;

pub fn at(offset_secs: i64) -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + TimeDelta::seconds(RACE_START_EPOCH + offset_secs)
}
