use chrono::{DateTime, TimeZone, Utc};
use paddock_core::{
    Driver, DriverNumber, Gap, GapReading, IntervalRecord, LapRecord, PositionRecord,
    SectorTimes, project,
};

fn ts(t: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + t, 0).unwrap()
}

fn driver(n: u32) -> Driver {
    Driver {
        broadcast_name: Some(format!("DRIVER {n}")),
        ..Driver::numbered(DriverNumber(n))
    }
}

fn pos(n: u32, t: i64, p: u32) -> PositionRecord {
    PositionRecord {
        driver_number: DriverNumber(n),
        date: ts(t),
        position: p,
    }
}

fn lap(n: u32, t: i64, lap_number: u32, duration: Option<f64>, s: [f64; 3]) -> LapRecord {
    LapRecord {
        driver_number: DriverNumber(n),
        date: None,
        date_start: Some(ts(t)),
        lap_number,
        lap_duration: duration,
        duration_sector_1: Some(s[0]),
        duration_sector_2: Some(s[1]),
        duration_sector_3: Some(s[2]),
        i1_speed: Some(280.0 + f64::from(lap_number)),
        i2_speed: None,
        st_speed: Some(310.0),
        is_pit_out_lap: Some(false),
    }
}

fn interval(n: u32, t: i64, iv: Option<Gap>, gap: Option<Gap>) -> IntervalRecord {
    IntervalRecord {
        driver_number: DriverNumber(n),
        date: ts(t),
        interval: iv,
        gap_to_leader: gap,
    }
}

#[test]
fn driver_without_any_feed_gets_a_blank_row() {
    let rows = project(&[driver(7)], &[], &[], &[]);
    assert_eq!(rows.len(), 1);
    let r = &rows[0];
    assert_eq!(r.driver.driver_number, DriverNumber(7));
    assert_eq!(r.position, None);
    assert_eq!(r.lap_count, 0);
    assert_eq!(r.last_lap, None);
    assert_eq!(r.best_lap, None);
    assert_eq!(r.live_sectors, SectorTimes::NONE);
    assert_eq!(r.previous_sectors, SectorTimes::NONE);
    assert_eq!(r.interval, GapReading::NoData);
    assert_eq!(r.gap_to_leader, GapReading::NoData);
}

#[test]
fn later_position_wins_regardless_of_arrival_order() {
    let positions = [pos(44, 5, 1), pos(44, 1, 3)];
    let rows = project(&[driver(44)], &positions, &[], &[]);
    assert_eq!(rows[0].position, Some(1));

    let positions = [pos(44, 1, 3), pos(44, 5, 1)];
    let rows = project(&[driver(44)], &positions, &[], &[]);
    assert_eq!(rows[0].position, Some(1));
}

#[test]
fn live_and_previous_sectors_come_from_last_two_laps() {
    let laps = [
        lap(1, 10, 1, None, [30.1, 0.0, 0.0]),
        lap(1, 20, 1, Some(95.3), [30.1, 32.2, 33.0]),
        lap(1, 30, 2, None, [29.8, 0.0, 0.0]),
        lap(1, 40, 2, Some(93.9), [29.8, 31.7, 32.4]),
        lap(1, 50, 3, None, [29.5, 31.1, 0.0]),
    ];
    let rows = project(&[driver(1)], &[], &laps, &[]);
    let r = &rows[0];
    assert_eq!(r.lap_count, 3);
    assert_eq!(
        r.live_sectors,
        SectorTimes {
            s1: Some(29.5),
            s2: Some(31.1),
            s3: Some(0.0)
        }
    );
    assert_eq!(
        r.previous_sectors,
        SectorTimes {
            s1: Some(29.8),
            s2: Some(31.7),
            s3: Some(32.4)
        }
    );
    assert_eq!(r.last_lap, Some(93.9));
    assert_eq!(r.best_lap, Some(93.9));
    assert_eq!(r.speed_traps.i1, Some(283.0));
}

#[test]
fn first_lap_previous_sectors_mirror_live_sectors() {
    let laps = [lap(16, 10, 1, None, [31.0, 33.0, 34.0])];
    let rows = project(&[driver(16)], &[], &laps, &[]);
    let r = &rows[0];
    assert_eq!(r.lap_count, 1);
    assert_eq!(r.live_sectors, r.previous_sectors);
    assert_eq!(r.live_sectors.s1, Some(31.0));
}

#[test]
fn best_lap_ignores_missing_and_zero_durations() {
    let laps = [
        lap(4, 10, 1, Some(0.0), [1.0, 1.0, 1.0]),
        lap(4, 20, 2, Some(91.2), [1.0, 1.0, 1.0]),
        lap(4, 30, 3, Some(90.4), [1.0, 1.0, 1.0]),
        lap(4, 40, 4, Some(92.0), [1.0, 1.0, 1.0]),
        lap(4, 50, 5, None, [1.0, 1.0, 1.0]),
    ];
    let rows = project(&[driver(4)], &[], &laps, &[]);
    assert_eq!(rows[0].best_lap, Some(90.4));
    assert_eq!(rows[0].last_lap, Some(92.0));
    assert_eq!(rows[0].lap_count, 5);
}

#[test]
fn no_positive_duration_means_no_lap_times() {
    let laps = [
        lap(4, 10, 1, Some(0.0), [1.0, 1.0, 1.0]),
        lap(4, 20, 2, None, [1.0, 1.0, 1.0]),
    ];
    let rows = project(&[driver(4)], &[], &laps, &[]);
    assert_eq!(rows[0].best_lap, None);
    assert_eq!(rows[0].last_lap, None);
    assert_eq!(rows[0].lap_count, 2);
}

#[test]
fn latest_interval_distinguishes_null_gap() {
    let intervals = [
        interval(1, 5, Some(Gap::Seconds(0.8)), Some(Gap::Seconds(3.1))),
        interval(1, 9, None, Some(Gap::Seconds(0.0))),
        interval(2, 9, Some(Gap::Laps(1)), Some(Gap::Laps(1))),
    ];
    let rows = project(&[driver(1), driver(2), driver(3)], &[], &[], &intervals);
    let by_num = |n: u32| {
        rows.iter()
            .find(|r| r.driver.driver_number == DriverNumber(n))
            .unwrap()
    };
    assert_eq!(by_num(1).interval, GapReading::Unrecorded);
    assert_eq!(by_num(1).gap_to_leader, GapReading::Gap(Gap::Seconds(0.0)));
    assert_eq!(by_num(2).interval, GapReading::Gap(Gap::Laps(1)));
    assert_eq!(by_num(3).interval, GapReading::NoData);
}

#[test]
fn rows_sort_by_position_with_unknowns_last_in_input_order() {
    let drivers = [driver(10), driver(20), driver(30), driver(40), driver(50)];
    let positions = [pos(30, 1, 2), pos(50, 1, 1), pos(10, 1, 3)];
    let rows = project(&drivers, &positions, &[], &[]);
    let order: Vec<u32> = rows.iter().map(|r| r.driver.driver_number.get()).collect();
    assert_eq!(order, vec![50, 30, 10, 20, 40]);
}

#[test]
fn feeds_for_unknown_drivers_are_ignored() {
    let positions = [pos(99, 1, 1), pos(5, 1, 2)];
    let rows = project(&[driver(5)], &positions, &[], &[]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].position, Some(2));
}
