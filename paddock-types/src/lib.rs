//! Paddock data transfer objects and configuration primitives.
//!
//! Records mirror the upstream JSON feeds field for field; derived types
//! (`Snapshot`, `DriverProjection`) are what orchestrators and renderers share.
#![warn(missing_docs)]

mod config;
mod error;
mod gap;
mod keys;
mod records;
mod session;
mod snapshot;

pub use config::{OPENF1_BASE_URL, PollConfig, UpstreamConfig};
pub use error::PaddockError;
pub use gap::{Gap, GapReading};
pub use keys::{DriverNumber, SessionKey};
pub use records::{IntervalRecord, LapRecord, PositionRecord, RaceControlMessage, WeatherSample};
pub use session::{Driver, Session};
pub use snapshot::{DriverProjection, SectorTimes, Snapshot, SpeedTraps};
