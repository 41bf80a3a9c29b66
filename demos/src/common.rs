use std::sync::Arc;
use std::time::Duration;

use paddock::{Paddock, PaddockBuilder, PaddockError, TelemetryConnector};

/// Environment variable that switches every demo to the offline fixtures.
pub const USE_MOCK_ENV: &str = "PADDOCK_DEMOS_USE_MOCK";

/// Whether the demos run against the offline fixtures.
#[must_use]
pub fn use_mock() -> bool {
    std::env::var(USE_MOCK_ENV).is_ok()
}

/// Return a connector for demos: the fixture weekend when
/// `PADDOCK_DEMOS_USE_MOCK` is set, the public OpenF1 API otherwise.
///
/// # Errors
/// Returns `InvalidArg` if the HTTP client cannot be constructed.
pub fn get_connector() -> Result<Arc<dyn TelemetryConnector>, PaddockError> {
    if use_mock() {
        println!("--- (Using Mock Connector for CI) ---");
        Ok(Arc::new(paddock_mock::MockConnector::new()))
    } else {
        Ok(Arc::new(paddock_openf1::OpenF1Connector::new_default()?))
    }
}

/// Orchestrator builder wired to [`get_connector`].
///
/// The fixtures describe the 2024 season opener, so the mock run pins that
/// season and skips the request pacing.
///
/// # Errors
/// Returns `InvalidArg` if the HTTP client cannot be constructed.
pub fn builder() -> Result<PaddockBuilder, PaddockError> {
    let b = Paddock::builder().with_connector(get_connector()?);
    Ok(if use_mock() {
        b.season(2024).request_delay(Duration::ZERO)
    } else {
        b
    })
}
