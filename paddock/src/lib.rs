//! Paddock assembles live race standings from a telemetry connector.
//!
//! Overview
//! - Resolves the session to follow (latest of the current year, else the
//!   previous year).
//! - Fetches drivers, positions, laps and intervals sequentially with a fixed
//!   pause between calls to stay under the upstream's rate limit.
//! - Serves race control from a reduced-frequency cache that degrades to stale
//!   data instead of failing the poll.
//! - Projects the raw feeds into one row per driver via `paddock_core`.
//!
//! Key behaviors
//! - Required feeds (sessions, drivers, positions, laps, intervals) abort the
//!   poll on error; race control and weather are absorbed into
//!   `Snapshot::warnings`.
//! - Polls never overlap. Timer polls are skipped while one is in flight;
//!   manual polls queue behind it.
//!
//! Examples
//! One-shot snapshot against the public API:
//! ```rust,ignore
//! use std::sync::Arc;
//! use paddock::Paddock;
//! use paddock_openf1::OpenF1Connector;
//!
//! let openf1 = Arc::new(OpenF1Connector::new_default()?);
//! let paddock = Paddock::builder().with_connector(openf1).build()?;
//! let (snapshot, rows) = paddock.standings(false).await?;
//! for row in &rows {
//!     println!("{} {}", paddock::format::position(row.position), row.driver.display_name());
//! }
//! ```
//!
//! Background polling:
//! ```rust,ignore
//! use paddock::{PollEvent, Poller, PollerConfig};
//!
//! let (handle, mut events) = Poller::spawn(Arc::new(paddock), PollerConfig::default());
//! while let Some(ev) = events.recv().await {
//!     if let PollEvent::Updated(snapshot) = ev {
//!         let rows = paddock_core::project_snapshot(&snapshot);
//!         // render rows ...
//!     }
//! }
//! handle.stop().await;
//! ```
#![warn(missing_docs)]

mod core;
/// Plain-text rendering helpers for projection fields.
pub mod format;
mod poller;
/// Reduced-frequency race-control cache.
pub mod race_control;
/// Session resolution.
pub mod session;

pub use crate::core::{Paddock, PaddockBuilder};
pub use poller::{PollEvent, Poller, PollerConfig, PollerHandle};
pub use race_control::{CacheOutcome, CacheRead, RaceControlCache};
pub use session::{resolve_current_session, resolve_for_year};

pub use paddock_core::{
    DriverProjection, PaddockError, PollConfig, Session, SessionKey, Snapshot, TelemetryConnector,
};
