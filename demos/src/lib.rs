//! Shared plumbing for the runnable demos under `examples/`.

/// Connector selection shared by all demos.
pub mod common;
