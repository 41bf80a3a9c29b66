//! paddock-core
//!
//! Core traits and the reconciliation engine shared across the paddock ecosystem.
//!
//! - `connector`: the `TelemetryConnector` trait every upstream implements.
//! - `projection`: reducers and the per-driver standings projection.
//! - `messages`: race-control and weather helpers for renderers.
//!
//! The projection engine is synchronous and pure; only connectors perform I/O.
#![warn(missing_docs)]

/// Upstream connector traits.
pub mod connector;
/// Race-control and weather helpers.
pub mod messages;
/// Driver projection engine.
pub mod projection;

pub use connector::{TelemetryConnector, WeatherProvider};
pub use messages::{latest_weather, recent_flags, recent_race_control};
pub use projection::standings::{project, project_driver, project_snapshot, sort_standings};
pub use paddock_types::*;
