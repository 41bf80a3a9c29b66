//! Background polling with timer and manual triggers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::{mpsc, oneshot};
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;

use paddock_core::{PaddockError, Snapshot};

use crate::core::Paddock;

/// Outcome of one poll, as delivered to the presentation layer.
#[derive(Debug, Clone)]
pub enum PollEvent {
    /// A poll completed; this is the new snapshot to display.
    Updated(Arc<Snapshot>),
    /// A poll failed. `last_good` is the snapshot to keep displaying.
    Failed {
        /// Error of the required feed that aborted the poll.
        error: PaddockError,
        /// Most recent successful snapshot, if any.
        last_good: Option<Arc<Snapshot>>,
    },
    /// A timer tick found a poll still in flight and was skipped.
    Skipped,
}

/// Settings for [`Poller::spawn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollerConfig {
    /// Whether timer-driven polling starts enabled.
    pub auto: bool,
    /// Capacity of the event channel.
    pub buffer: usize,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            auto: true,
            buffer: 16,
        }
    }
}

enum Command {
    Refresh,
    SetAuto(bool),
}

/// Spawns the polling task for a [`Paddock`].
pub struct Poller;

impl Poller {
    /// Start polling in the background.
    ///
    /// With `auto` enabled the first poll runs immediately, then every
    /// `poll_interval` of the orchestrator's config. Timer polls are skipped
    /// while another poll is in flight; manual refreshes wait for it and force a
    /// race-control refresh. A failed poll does not stop the timer.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn spawn(paddock: Arc<Paddock>, cfg: PollerConfig) -> (PollerHandle, mpsc::Receiver<PollEvent>) {
        let (event_tx, event_rx) = mpsc::channel(cfg.buffer.max(1));
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (stop_tx, stop_rx) = oneshot::channel();

        let join = tokio::spawn(run(paddock, cfg.auto, cmd_rx, stop_rx, event_tx));
        (
            PollerHandle {
                cmd_tx,
                stop_tx: Some(stop_tx),
                join: Some(join),
            },
            event_rx,
        )
    }
}

type LastGood = Arc<StdMutex<Option<Arc<Snapshot>>>>;

async fn run(
    paddock: Arc<Paddock>,
    mut auto: bool,
    mut cmd_rx: mpsc::Receiver<Command>,
    mut stop_rx: oneshot::Receiver<()>,
    events: mpsc::Sender<PollEvent>,
) {
    let mut ticker = tokio::time::interval(paddock.config().poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let last_good: LastGood = Arc::new(StdMutex::new(None));
    // Set while a manual poll is queued or running.
    let manual_pending = Arc::new(AtomicBool::new(false));
    // Dropping the set on exit aborts polls still in flight.
    let mut polls = JoinSet::new();

    loop {
        tokio::select! {
            biased;
            _ = &mut stop_rx => break,
            cmd = cmd_rx.recv() => match cmd {
                Some(Command::Refresh) => {
                    if manual_pending.swap(true, Ordering::AcqRel) {
                        #[cfg(feature = "tracing")]
                        tracing::debug!("manual refresh already pending, merging");
                    } else {
                        polls.spawn(poll_once(
                            Arc::clone(&paddock),
                            Some(Arc::clone(&manual_pending)),
                            Arc::clone(&last_good),
                            events.clone(),
                        ));
                    }
                }
                Some(Command::SetAuto(on)) => {
                    if on && !auto {
                        ticker.reset();
                    }
                    auto = on;
                    #[cfg(feature = "tracing")]
                    tracing::info!(auto, "automatic polling toggled");
                }
                None => break,
            },
            Some(_) = polls.join_next(), if !polls.is_empty() => {}
            _ = ticker.tick(), if auto => {
                polls.spawn(poll_once(
                    Arc::clone(&paddock),
                    None,
                    Arc::clone(&last_good),
                    events.clone(),
                ));
            }
        }
    }
}

/// One poll. `manual` carries the pending flag of a manual refresh, cleared
/// once the poll has finished; `None` is a timer poll.
async fn poll_once(
    paddock: Arc<Paddock>,
    manual: Option<Arc<AtomicBool>>,
    last_good: LastGood,
    events: mpsc::Sender<PollEvent>,
) {
    let result = if let Some(pending) = &manual {
        let result = paddock.snapshot(true).await;
        pending.store(false, Ordering::Release);
        result
    } else {
        match paddock.try_snapshot(false).await {
            Some(r) => r,
            None => {
                let _ = events.send(PollEvent::Skipped).await;
                return;
            }
        }
    };

    let event = match result {
        Ok(snapshot) => {
            let snapshot = Arc::new(snapshot);
            if let Ok(mut slot) = last_good.lock() {
                *slot = Some(Arc::clone(&snapshot));
            }
            PollEvent::Updated(snapshot)
        }
        Err(error) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(%error, manual = manual.is_some(), "poll failed, keeping last good snapshot");
            let last_good = last_good.lock().ok().and_then(|slot| slot.clone());
            PollEvent::Failed { error, last_good }
        }
    };
    // Receiver gone means nobody is listening any more.
    let _ = events.send(event).await;
}

/// Handle to a running [`Poller`]. Dropping it stops the task.
pub struct PollerHandle {
    cmd_tx: mpsc::Sender<Command>,
    stop_tx: Option<oneshot::Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Request an immediate poll that also refreshes race control.
    ///
    /// Requests made while a manual poll is still queued or running are merged
    /// into it. Returns `false` if the poller has stopped.
    pub async fn refresh_now(&self) -> bool {
        self.cmd_tx.send(Command::Refresh).await.is_ok()
    }

    /// Enable or disable timer-driven polling. Manual refreshes keep working.
    ///
    /// Returns `false` if the poller has stopped.
    pub async fn set_auto(&self, on: bool) -> bool {
        self.cmd_tx.send(Command::SetAuto(on)).await.is_ok()
    }

    /// Whether the background task has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.join.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Stop polling and wait for the task to exit.
    pub async fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.await;
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(h) = self.join.take()
            && !h.is_finished()
        {
            h.abort();
        }
    }
}
