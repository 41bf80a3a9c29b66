//! Time gaps as published by the intervals feed.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// A gap to another car: either seconds or a whole number of laps.
///
/// Upstream publishes seconds as JSON numbers and lapped cars as strings such
/// as `"+1 LAP"` or `"+2 LAPS"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gap {
    /// Gap in seconds.
    Seconds(f64),
    /// Gap in completed laps.
    Laps(u32),
}

impl Gap {
    /// Seconds value, if this gap is time-based.
    #[must_use]
    pub const fn seconds(self) -> Option<f64> {
        match self {
            Self::Seconds(s) => Some(s),
            Self::Laps(_) => None,
        }
    }

    /// Parse the textual form used upstream ("+1 LAP", "+3 LAPS", "+1.234").
    ///
    /// # Errors
    /// Returns a description of the offending text when it is neither a lap
    /// marker nor a number.
    pub fn parse(text: &str) -> Result<Self, String> {
        let t = text.trim();
        let body = t.strip_prefix('+').unwrap_or(t).trim();
        let upper = body.to_ascii_uppercase();
        if let Some(n) = upper
            .strip_suffix("LAPS")
            .or_else(|| upper.strip_suffix("LAP"))
        {
            return n
                .trim()
                .parse::<u32>()
                .map(Self::Laps)
                .map_err(|_| format!("invalid lap gap: {text:?}"));
        }
        body.parse::<f64>()
            .map(Self::Seconds)
            .map_err(|_| format!("invalid gap: {text:?}"))
    }
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(s) => write!(f, "+{s:.3}"),
            Self::Laps(1) => write!(f, "+1 LAP"),
            Self::Laps(n) => write!(f, "+{n} LAPS"),
        }
    }
}

impl Serialize for Gap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Seconds(s) => serializer.serialize_f64(*s),
            Self::Laps(_) => serializer.collect_str(self),
        }
    }
}

impl<'de> Deserialize<'de> for Gap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Seconds(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Seconds(s) => Ok(Self::Seconds(s)),
            Raw::Text(t) => Self::parse(&t).map_err(de::Error::custom),
        }
    }
}

/// Interval/gap column of a projection row.
///
/// Keeps "the driver has no interval record" apart from "the latest record
/// carries no gap" (the leader, or a car the timing system has not placed).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "gap", rename_all = "snake_case")]
pub enum GapReading {
    /// No interval record exists for the driver.
    #[default]
    NoData,
    /// The latest interval record carries a null gap.
    Unrecorded,
    /// The latest interval record carries a gap.
    Gap(Gap),
}

impl GapReading {
    /// Lift the nullable field of the latest record into a reading.
    #[must_use]
    pub const fn from_latest(field: Option<Gap>) -> Self {
        match field {
            Some(g) => Self::Gap(g),
            None => Self::Unrecorded,
        }
    }

    /// The gap, if one was recorded.
    #[must_use]
    pub const fn gap(self) -> Option<Gap> {
        match self {
            Self::Gap(g) => Some(g),
            _ => None,
        }
    }
}
