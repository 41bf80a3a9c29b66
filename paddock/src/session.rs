//! Picking the session a live client should follow.

use chrono::{Datelike, Utc};
use paddock_core::{PaddockError, Session, TelemetryConnector};

/// Most recent session of `year`, falling back to the last session of the
/// previous year when `year` has none.
///
/// Sessions are assumed to be listed in order of occurrence, so "most recent"
/// is simply the last element. `Ok(None)` means there is no event to follow,
/// which is a valid state rather than a failure.
///
/// # Errors
/// Propagates the connector's error for either query.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "paddock::session::resolve_for_year",
        skip(connector),
        fields(connector = connector.name()),
        err,
    )
)]
pub async fn resolve_for_year(
    connector: &dyn TelemetryConnector,
    year: i32,
) -> Result<Option<Session>, PaddockError> {
    if let Some(session) = connector.sessions(year).await?.pop() {
        return Ok(Some(session));
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(year, "no sessions, trying previous year");
    Ok(connector.sessions(year - 1).await?.pop())
}

/// [`resolve_for_year`] for the current UTC calendar year.
///
/// # Errors
/// Propagates the connector's error for either query.
pub async fn resolve_current_session(
    connector: &dyn TelemetryConnector,
) -> Result<Option<Session>, PaddockError> {
    resolve_for_year(connector, Utc::now().year()).await
}
