use std::collections::HashMap;

use paddock_types::{
    Driver, DriverNumber, DriverProjection, GapReading, IntervalRecord, LapRecord, PositionRecord,
    SectorTimes, Snapshot, SpeedTraps,
};

use super::fold::{
    fallback_lap_record, group_by_driver, latest, latest_valid_lap, max_lap,
    min_positive_duration, previous_lap_number, record_for_lap,
};

/// Derive one row per driver from the raw, unordered feeds.
///
/// - Every entry of `drivers` yields exactly one row, even with no feed data.
/// - Rows are sorted by ascending position; drivers without a known position
///   follow in arrival order.
/// - Pure: the result depends only on the inputs, never on the current time.
#[must_use]
pub fn project(
    drivers: &[Driver],
    positions: &[PositionRecord],
    laps: &[LapRecord],
    intervals: &[IntervalRecord],
) -> Vec<DriverProjection> {
    let positions = group_by_driver(positions);
    let laps = group_by_driver(laps);
    let intervals = group_by_driver(intervals);

    let mut rows: Vec<DriverProjection> = drivers
        .iter()
        .map(|d| {
            let n = d.driver_number;
            project_driver(
                d,
                feed_of(&positions, n),
                feed_of(&laps, n),
                feed_of(&intervals, n),
            )
        })
        .collect();
    sort_standings(&mut rows);
    rows
}

/// Project the feeds carried by a snapshot.
#[must_use]
pub fn project_snapshot(snapshot: &Snapshot) -> Vec<DriverProjection> {
    project(
        &snapshot.drivers,
        &snapshot.positions,
        &snapshot.laps,
        &snapshot.intervals,
    )
}

/// Stable sort by position with unknown positions last.
pub fn sort_standings(rows: &mut [DriverProjection]) {
    rows.sort_by_key(|r| (r.position.is_none(), r.position));
}

fn feed_of<'m, 'a, R>(groups: &'m HashMap<DriverNumber, Vec<&'a R>>, n: DriverNumber) -> &'m [&'a R] {
    groups.get(&n).map(Vec::as_slice).unwrap_or(&[])
}

/// Row for one driver given that driver's records only.
#[must_use]
pub fn project_driver(
    driver: &Driver,
    positions: &[&PositionRecord],
    laps: &[&LapRecord],
    intervals: &[&IntervalRecord],
) -> DriverProjection {
    let position = latest(positions.iter().copied()).map(|p| p.position);

    let last_lap = latest_valid_lap(laps).and_then(LapRecord::valid_duration);
    let best_lap = min_positive_duration(laps);
    let lap_count = max_lap(laps);

    let live = record_for_lap(laps, lap_count).or_else(|| fallback_lap_record(laps));
    let previous = record_for_lap(laps, previous_lap_number(lap_count));

    let (interval, gap_to_leader) = latest(intervals.iter().copied()).map_or(
        (GapReading::NoData, GapReading::NoData),
        |i| {
            (
                GapReading::from_latest(i.interval),
                GapReading::from_latest(i.gap_to_leader),
            )
        },
    );

    #[cfg(feature = "tracing")]
    tracing::trace!(
        driver = %driver.driver_number,
        records = laps.len(),
        lap_count,
        live_lap = live.map(|l| l.lap_number),
        previous_lap = previous.map(|l| l.lap_number),
        "projected driver"
    );

    DriverProjection {
        driver: driver.clone(),
        position,
        lap_count,
        last_lap,
        best_lap,
        live_sectors: live.map_or(SectorTimes::NONE, sectors),
        previous_sectors: previous.map_or(SectorTimes::NONE, sectors),
        speed_traps: live.map_or_else(SpeedTraps::default, |l| SpeedTraps {
            i1: l.i1_speed,
            i2: l.i2_speed,
            st: l.st_speed,
        }),
        interval,
        gap_to_leader,
    }
}

const fn sectors(l: &LapRecord) -> SectorTimes {
    SectorTimes {
        s1: l.duration_sector_1,
        s2: l.duration_sector_2,
        s3: l.duration_sector_3,
    }
}
