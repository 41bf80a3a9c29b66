//! Session and driver identity records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::keys::{DriverNumber, SessionKey};

/// One discrete event instance (practice, qualifying, sprint, race).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Upstream session identifier.
    pub session_key: SessionKey,
    /// Display name, e.g. "Race" or "Practice 1".
    #[serde(default)]
    pub session_name: String,
    /// Session category, e.g. "Race", "Qualifying", "Practice".
    #[serde(default)]
    pub session_type: Option<String>,
    /// Meeting (weekend) identifier.
    #[serde(default)]
    pub meeting_key: Option<u32>,
    /// Town or venue name.
    #[serde(default)]
    pub location: Option<String>,
    /// Host country.
    #[serde(default)]
    pub country_name: Option<String>,
    /// Short circuit name.
    #[serde(default)]
    pub circuit_short_name: Option<String>,
    /// Championship year.
    pub year: i32,
    /// Scheduled start.
    #[serde(default)]
    pub date_start: Option<DateTime<Utc>>,
    /// Scheduled end.
    #[serde(default)]
    pub date_end: Option<DateTime<Utc>>,
    /// Local offset from UTC as reported upstream, e.g. "02:00:00".
    #[serde(default)]
    pub gmt_offset: Option<String>,
}

impl Session {
    /// Returns true if `now` falls inside the scheduled window.
    ///
    /// Sessions without both bounds are never considered live.
    #[must_use]
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        match (self.date_start, self.date_end) {
            (Some(start), Some(end)) => start <= now && now <= end,
            _ => false,
        }
    }
}

/// Static per-session driver identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    /// Car number; unique within a session.
    pub driver_number: DriverNumber,
    /// Name as shown on timing screens, e.g. "M VERSTAPPEN".
    #[serde(default)]
    pub broadcast_name: Option<String>,
    /// Full name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Three-letter acronym, e.g. "VER".
    #[serde(default)]
    pub name_acronym: Option<String>,
    /// Country code, e.g. "NED".
    #[serde(default)]
    pub country_code: Option<String>,
    /// Team name.
    #[serde(default)]
    pub team_name: Option<String>,
    /// Team colour as a hex string without the leading '#'.
    #[serde(default)]
    pub team_colour: Option<String>,
}

impl Driver {
    /// Minimal identity carrying only the car number.
    #[must_use]
    pub const fn numbered(driver_number: DriverNumber) -> Self {
        Self {
            driver_number,
            broadcast_name: None,
            full_name: None,
            first_name: None,
            last_name: None,
            name_acronym: None,
            country_code: None,
            team_name: None,
            team_colour: None,
        }
    }

    /// Best available display name: broadcast name, then full name, then "#<number>".
    #[must_use]
    pub fn display_name(&self) -> String {
        self.broadcast_name
            .as_deref()
            .or(self.full_name.as_deref())
            .map_or_else(|| format!("#{}", self.driver_number), str::to_string)
    }
}
