//! Plain-text rendering of projection fields for terminal front-ends.

use chrono::{DateTime, Utc};
use paddock_core::{Gap, GapReading};

/// Placeholder for absent values.
pub const NO_DATA: &str = "-";

/// `1:35.110` for laps of a minute or more, `58.004s` below that.
#[must_use]
pub fn lap_time(seconds: Option<f64>) -> String {
    match seconds {
        Some(s) if s > 0.0 => {
            let minutes = (s / 60.0).floor();
            if minutes > 0.0 {
                format!("{minutes:.0}:{:06.3}", s - minutes * 60.0)
            } else {
                format!("{s:.3}s")
            }
        }
        _ => NO_DATA.to_string(),
    }
}

/// `31.102s`, or the placeholder for missing or non-positive durations.
#[must_use]
pub fn sector_time(seconds: Option<f64>) -> String {
    match seconds {
        Some(s) if s > 0.0 => format!("{s:.3}s"),
        _ => NO_DATA.to_string(),
    }
}

/// Interval or gap column.
///
/// A null reading is how the leader's row arrives and renders as `LEAD`, as
/// does a zero gap; a driver without any interval record shows the placeholder.
#[must_use]
pub fn gap(reading: &GapReading) -> String {
    match reading {
        GapReading::NoData => NO_DATA.to_string(),
        GapReading::Unrecorded => "LEAD".to_string(),
        GapReading::Gap(Gap::Seconds(s)) if *s == 0.0 => "LEAD".to_string(),
        GapReading::Gap(Gap::Seconds(s)) if *s < 0.0 || s.is_nan() => NO_DATA.to_string(),
        GapReading::Gap(Gap::Seconds(s)) => format!("+{s:.3}s"),
        GapReading::Gap(laps) => laps.to_string(),
    }
}

/// Position column; unknown positions render as `?`.
#[must_use]
pub fn position(position: Option<u32>) -> String {
    position.map_or_else(|| "?".to_string(), |p| p.to_string())
}

/// Speed-trap reading in km/h.
#[must_use]
pub fn speed(kmh: Option<f64>) -> String {
    kmh.map_or_else(|| NO_DATA.to_string(), |v| format!("{v:.0}"))
}

/// `HH:MM:SS` wall-clock time of a race-control message, in UTC.
#[must_use]
pub fn clock(at: DateTime<Utc>) -> String {
    at.format("%H:%M:%S").to_string()
}

/// Sixteen-point compass label for a wind direction in degrees.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compass(degrees: f64) -> &'static str {
    const POINTS: [&str; 16] = [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
        "NW", "NNW",
    ];
    let idx = (degrees.rem_euclid(360.0) / 22.5).round() as usize % POINTS.len();
    POINTS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lap_times() {
        assert_eq!(lap_time(Some(95.11)), "1:35.110");
        assert_eq!(lap_time(Some(62.5)), "1:02.500");
        assert_eq!(lap_time(Some(58.004)), "58.004s");
        assert_eq!(lap_time(Some(0.0)), "-");
        assert_eq!(lap_time(None), "-");
    }

    #[test]
    fn gaps() {
        assert_eq!(gap(&GapReading::NoData), "-");
        assert_eq!(gap(&GapReading::Unrecorded), "LEAD");
        assert_eq!(gap(&GapReading::Gap(Gap::Seconds(0.0))), "LEAD");
        assert_eq!(gap(&GapReading::Gap(Gap::Seconds(-1.0))), "-");
        assert_eq!(gap(&GapReading::Gap(Gap::Seconds(0.6124))), "+0.612s");
        assert_eq!(gap(&GapReading::Gap(Gap::Laps(1))), "+1 LAP");
    }

    #[test]
    fn compass_points() {
        assert_eq!(compass(0.0), "N");
        assert_eq!(compass(182.0), "S");
        assert_eq!(compass(350.0), "N");
        assert_eq!(compass(-90.0), "W");
    }
}
