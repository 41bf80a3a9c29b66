use paddock_core::{DriverNumber, Gap, IntervalRecord, LapRecord, PositionRecord};

use super::at;

fn position(n: u32, offset: i64, position: u32) -> PositionRecord {
    PositionRecord {
        driver_number: DriverNumber(n),
        date: at(offset),
        position,
    }
}

/// Grid order first, then a first-lap pass (LEC over PER) and a late one
/// (HAM over PER). Records are deliberately not in time order.
pub fn positions() -> Vec<PositionRecord> {
    vec![
        position(1, -600, 1),
        position(16, -600, 2),
        position(11, -600, 3),
        position(44, -600, 4),
        position(2, -600, 5),
        position(11, 180, 4),
        position(44, 180, 3),
        position(16, 95, 3),
        position(11, 95, 2),
        position(16, 180, 2),
    ]
}

struct Lap {
    n: u32,
    lap: u32,
    start: i64,
    duration: Option<f64>,
    sectors: [Option<f64>; 3],
    speeds: [Option<f64>; 3],
}

impl From<Lap> for LapRecord {
    fn from(l: Lap) -> Self {
        Self {
            driver_number: DriverNumber(l.n),
            date: None,
            date_start: Some(at(l.start)),
            lap_number: l.lap,
            lap_duration: l.duration,
            duration_sector_1: l.sectors[0],
            duration_sector_2: l.sectors[1],
            duration_sector_3: l.sectors[2],
            i1_speed: l.speeds[0],
            i2_speed: l.speeds[1],
            st_speed: l.speeds[2],
            is_pit_out_lap: Some(false),
        }
    }
}

fn lap(n: u32, lap: u32, start: i64, duration: Option<f64>, s: [f64; 3], st: f64) -> LapRecord {
    Lap {
        n,
        lap,
        start,
        duration,
        sectors: [Some(s[0]), Some(s[1]), Some(s[2])],
        speeds: [Some(st - 40.0), Some(st - 25.0), Some(st)],
    }
    .into()
}

/// Three laps for the front runners, two for the lapped car; every car's
/// current lap is still open (no duration, sector 3 missing).
pub fn laps() -> Vec<LapRecord> {
    let mut out = vec![
        lap(1, 1, 0, None, [39.102, 40.001, 21.222], 301.0),
        lap(1, 2, 100, Some(95.110), [31.102, 41.992, 22.016], 314.0),
        lap(16, 1, 0, None, [39.551, 40.312, 21.601], 299.0),
        lap(16, 2, 101, Some(95.602), [31.301, 42.100, 22.201], 311.0),
        lap(11, 1, 0, None, [39.400, 40.120, 21.550], 300.0),
        lap(11, 2, 101, Some(96.014), [31.420, 42.300, 22.294], 312.0),
        lap(44, 1, 0, None, [39.720, 40.600, 21.880], 298.0),
        lap(44, 2, 102, Some(95.501), [31.215, 42.077, 22.209], 309.0),
        lap(2, 1, 0, None, [40.300, 41.400, 22.200], 296.0),
    ];
    for (n, start, s1, s2) in [
        (1, 195, 31.004, Some(41.880)),
        (16, 197, 31.190, Some(42.010)),
        (11, 197, 31.380, None),
        (44, 198, 31.150, Some(41.990)),
        (2, 104, 32.050, Some(43.100)),
    ] {
        let lap_number = if n == 2 { 2 } else { 3 };
        out.push(
            Lap {
                n,
                lap: lap_number,
                start,
                duration: None,
                sectors: [Some(s1), s2, None],
                speeds: [Some(275.0), s2.map(|_| 290.0), None],
            }
            .into(),
        );
    }
    out
}

fn interval(n: u32, offset: i64, interval: Option<Gap>, gap: Option<Gap>) -> IntervalRecord {
    IntervalRecord {
        driver_number: DriverNumber(n),
        date: at(offset),
        interval,
        gap_to_leader: gap,
    }
}

/// Leader rows carry no gaps; the lapped car reports `+1 LAP`. Driver 11 has
/// no interval record at all.
pub fn intervals() -> Vec<IntervalRecord> {
    vec![
        interval(1, 150, None, None),
        interval(16, 150, Some(Gap::Seconds(0.612)), Some(Gap::Seconds(0.612))),
        interval(16, 60, Some(Gap::Seconds(1.400)), Some(Gap::Seconds(1.400))),
        interval(44, 150, Some(Gap::Seconds(0.488)), Some(Gap::Seconds(1.100))),
        interval(2, 150, Some(Gap::Laps(1)), Some(Gap::Laps(1))),
    ]
}
