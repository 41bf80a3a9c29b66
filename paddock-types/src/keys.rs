//! Typed identifiers shared by every feed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Upstream identifier of one session (practice, qualifying, race...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionKey(pub u32);

impl SessionKey {
    /// Construct a session key from its raw upstream value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw upstream value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Car number; the join key across all feeds within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverNumber(pub u32);

impl DriverNumber {
    /// Construct a driver number from its raw upstream value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw upstream value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DriverNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DriverNumber {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<u32> for SessionKey {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}
