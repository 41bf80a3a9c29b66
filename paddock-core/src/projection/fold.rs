//! Small reducers over per-driver feed sequences.
//!
//! Each reducer takes the records of one driver, in arrival order, and
//! returns one well-defined value. Ties are always resolved in favour of the
//! record encountered first.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use paddock_types::{DriverNumber, IntervalRecord, LapRecord, PositionRecord};

/// A feed record keyed by driver and ordered by time.
pub trait FeedRecord {
    /// Car the record belongs to.
    fn driver_number(&self) -> DriverNumber;
    /// Record time; records without one sort before every timestamped record.
    fn timestamp(&self) -> Option<DateTime<Utc>>;
}

impl FeedRecord for PositionRecord {
    fn driver_number(&self) -> DriverNumber {
        self.driver_number
    }
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.date)
    }
}

impl FeedRecord for LapRecord {
    fn driver_number(&self) -> DriverNumber {
        self.driver_number
    }
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Self::timestamp(self)
    }
}

impl FeedRecord for IntervalRecord {
    fn driver_number(&self) -> DriverNumber {
        self.driver_number
    }
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.date)
    }
}

/// Group a feed by driver, preserving arrival order inside each group.
pub fn group_by_driver<R: FeedRecord>(records: &[R]) -> HashMap<DriverNumber, Vec<&R>> {
    let mut out: HashMap<DriverNumber, Vec<&R>> = HashMap::new();
    for r in records {
        out.entry(r.driver_number()).or_default().push(r);
    }
    out
}

/// Record with the greatest timestamp.
pub fn latest<'a, R, I>(records: I) -> Option<&'a R>
where
    R: FeedRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut best: Option<&'a R> = None;
    for r in records {
        match best {
            Some(b) if r.timestamp() <= b.timestamp() => {}
            _ => best = Some(r),
        }
    }
    best
}

/// Highest lap number over all records, or 0 when there are none.
#[must_use]
pub fn max_lap(laps: &[&LapRecord]) -> u32 {
    laps.iter().map(|l| l.lap_number).max().unwrap_or(0)
}

/// Most recent record carrying a positive lap duration.
#[must_use]
pub fn latest_valid_lap<'a>(laps: &[&'a LapRecord]) -> Option<&'a LapRecord> {
    latest(laps.iter().copied().filter(|l| l.valid_duration().is_some()))
}

/// Smallest positive lap duration.
#[must_use]
pub fn min_positive_duration(laps: &[&LapRecord]) -> Option<f64> {
    laps.iter()
        .filter_map(|l| l.valid_duration())
        .fold(None, |best: Option<f64>, d| match best {
            Some(b) if b <= d => Some(b),
            _ => Some(d),
        })
}

/// Most recent record for a given lap number.
#[must_use]
pub fn record_for_lap<'a>(laps: &[&'a LapRecord], lap_number: u32) -> Option<&'a LapRecord> {
    latest(laps.iter().copied().filter(|l| l.lap_number == lap_number))
}

/// Most recent record by `(lap_number desc, timestamp desc)`.
///
/// Fallback for the live lap when no record carries `lap_count`. Since
/// `lap_count` is taken from the same records, `project_driver` only reaches
/// this with an empty feed, where it yields `None`.
#[must_use]
pub fn fallback_lap_record<'a>(laps: &[&'a LapRecord]) -> Option<&'a LapRecord> {
    let mut best: Option<&'a LapRecord> = None;
    for l in laps.iter().copied() {
        match best {
            Some(b) if (l.lap_number, l.timestamp()) <= (b.lap_number, b.timestamp()) => {}
            _ => best = Some(l),
        }
    }
    best
}

/// Lap whose sectors fill the "previous lap" columns.
///
/// On lap 1 (and before any lap) this is the current lap itself.
#[must_use]
pub const fn previous_lap_number(lap_count: u32) -> u32 {
    if lap_count > 1 { lap_count - 1 } else { lap_count }
}
