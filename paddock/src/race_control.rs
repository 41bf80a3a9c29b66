//! Reduced-frequency race-control feed with a stale-on-error cache.
//!
//! Race-control messages change far less often than timing data, so the feed
//! is only re-fetched on every Nth poll. A failed refresh never fails the
//! poll: the last good array for the session is served instead.

use paddock_core::{PaddockError, RaceControlMessage, SessionKey, TelemetryConnector};

/// How a [`RaceControlCache::read`] was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheOutcome {
    /// The feed was fetched on this call.
    Fresh,
    /// The fetch was not due; the cached array was returned.
    Cached,
    /// The fetch was due but failed; the cached (or empty) array was returned.
    Stale(PaddockError),
}

/// Messages returned by one cache read, with how they were obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheRead {
    /// Messages for the requested session.
    pub messages: Vec<RaceControlMessage>,
    /// Whether the messages are fresh, cached or stale.
    pub outcome: CacheOutcome,
}

/// Poll counter plus the last successfully fetched race-control array.
///
/// The counter lives as long as the cache and is never reset. Cached data
/// belongs to one session; asking for another session discards it. Until a
/// fetch returns at least one message the feed is requested on every call.
#[derive(Debug, Clone)]
pub struct RaceControlCache {
    every: u64,
    counter: u64,
    cached: Option<(SessionKey, Vec<RaceControlMessage>)>,
}

impl Default for RaceControlCache {
    fn default() -> Self {
        Self::new(3)
    }
}

impl RaceControlCache {
    /// Refresh on every `every`th call; zero is treated as one.
    #[must_use]
    pub const fn new(every: u64) -> Self {
        Self {
            every: if every == 0 { 1 } else { every },
            counter: 0,
            cached: None,
        }
    }

    /// Number of reads so far.
    #[must_use]
    pub const fn counter(&self) -> u64 {
        self.counter
    }

    /// Refresh period in calls.
    #[must_use]
    pub const fn every(&self) -> u64 {
        self.every
    }

    /// Last good array for `session`, if one was ever fetched.
    #[must_use]
    pub fn cached(&self, session: SessionKey) -> Option<&[RaceControlMessage]> {
        match &self.cached {
            Some((key, msgs)) if *key == session => Some(msgs.as_slice()),
            _ => None,
        }
    }

    fn is_due(&self, session: SessionKey, force_refresh: bool) -> bool {
        force_refresh
            || self.counter % self.every == 0
            || self.cached(session).is_none_or(<[_]>::is_empty)
    }

    /// Race-control messages for `session`, fetching only when due.
    ///
    /// Counts the call, then fetches when `force_refresh` is set, the counter
    /// is a multiple of the refresh period, or no message is cached yet for
    /// this session. An empty answer is cached but re-fetched on the next call.
    /// Never fails: see [`CacheOutcome::Stale`].
    pub async fn get(
        &mut self,
        connector: &dyn TelemetryConnector,
        session: SessionKey,
        force_refresh: bool,
    ) -> Vec<RaceControlMessage> {
        self.read(connector, session, force_refresh).await.messages
    }

    /// Same as [`get`](Self::get), also reporting how the answer was obtained.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "paddock::race_control::read",
            skip(self, connector),
            fields(counter = self.counter + 1),
        )
    )]
    pub async fn read(
        &mut self,
        connector: &dyn TelemetryConnector,
        session: SessionKey,
        force_refresh: bool,
    ) -> CacheRead {
        self.counter += 1;
        if self
            .cached
            .as_ref()
            .is_some_and(|(key, _)| *key != session)
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(%session, "session changed, dropping cached race control");
            self.cached = None;
        }

        if !self.is_due(session, force_refresh) {
            #[cfg(feature = "tracing")]
            tracing::debug!(counter = self.counter, "race control served from cache");
            return CacheRead {
                messages: self.cached(session).map(<[_]>::to_vec).unwrap_or_default(),
                outcome: CacheOutcome::Cached,
            };
        }

        match connector.race_control(session).await {
            Ok(messages) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    counter = self.counter,
                    messages = messages.len(),
                    "race control refreshed"
                );
                self.cached = Some((session, messages.clone()));
                CacheRead {
                    messages,
                    outcome: CacheOutcome::Fresh,
                }
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %e, "race control refresh failed, serving cached data");
                CacheRead {
                    messages: self.cached(session).map(<[_]>::to_vec).unwrap_or_default(),
                    outcome: CacheOutcome::Stale(e),
                }
            }
        }
    }
}
