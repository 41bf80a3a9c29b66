//! Driver projection engine.
//!
//! Modules include:
//! - `fold`: reducers over one driver's records (latest, max lap, best lap)
//! - `standings`: per-driver rows assembled from the reducers, sorted by position
/// Reducers over per-driver feed sequences.
pub mod fold;
/// Row assembly and ordering.
pub mod standings;
