mod helpers;

use std::sync::Arc;
use std::time::Duration;

use helpers::*;
use paddock::{Paddock, PaddockError, PollEvent, Poller, PollerConfig, TelemetryConnector};
use paddock_mock::{Feed, MockBehavior};
use tokio::sync::mpsc::Receiver;
use tokio::time::Instant;

fn paddock(mock: Arc<dyn TelemetryConnector>, delay: Duration) -> Arc<Paddock> {
    Arc::new(
        Paddock::builder()
            .with_connector(mock)
            .request_delay(delay)
            .poll_interval(Duration::from_secs(10))
            .build()
            .unwrap(),
    )
}

async fn next(events: &mut Receiver<PollEvent>) -> PollEvent {
    events.recv().await.expect("poller still running")
}

#[tokio::test(start_paused = true)]
async fn first_poll_is_immediate_then_periodic() {
    let (mock, _ctl) = primed_mock().await;
    let start = Instant::now();
    let (handle, mut events) = Poller::spawn(paddock(mock, Duration::ZERO), PollerConfig::default());

    assert!(matches!(next(&mut events).await, PollEvent::Updated(_)));
    assert!(start.elapsed() < Duration::from_secs(1));

    assert!(matches!(next(&mut events).await, PollEvent::Updated(_)));
    assert!(start.elapsed() >= Duration::from_secs(10));

    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn failed_poll_keeps_last_good_and_timer_continues() {
    let (mock, ctl) = primed_mock().await;
    let (handle, mut events) = Poller::spawn(paddock(mock, Duration::ZERO), PollerConfig::default());

    let PollEvent::Updated(good) = next(&mut events).await else {
        panic!("expected a snapshot");
    };

    ctl.set_intervals(MockBehavior::Fail(PaddockError::upstream_unavailable(
        "/intervals",
        502,
    )))
    .await;
    match next(&mut events).await {
        PollEvent::Failed { error, last_good } => {
            assert_eq!(error, PaddockError::upstream_unavailable("/intervals", 502));
            assert!(Arc::ptr_eq(&last_good.expect("last good kept"), &good));
        }
        other => panic!("expected failure, got {other:?}"),
    }

    ctl.set_intervals(MockBehavior::Return(vec![])).await;
    assert!(matches!(next(&mut events).await, PollEvent::Updated(_)));
    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn failure_before_any_success_has_no_last_good() {
    let (mock, ctl) = primed_mock().await;
    ctl.set_drivers(MockBehavior::Fail(PaddockError::timeout("/drivers")))
        .await;
    let (handle, mut events) = Poller::spawn(paddock(mock, Duration::ZERO), PollerConfig::default());
    assert!(matches!(
        next(&mut events).await,
        PollEvent::Failed { last_good: None, .. }
    ));
    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn tick_is_skipped_while_a_slow_poll_runs() {
    let (mock, ctl) = primed_mock().await;
    // six 3s pauses per poll: longer than the 10s interval
    let (handle, mut events) =
        Poller::spawn(paddock(mock, Duration::from_secs(3)), PollerConfig::default());

    assert!(matches!(next(&mut events).await, PollEvent::Skipped));
    assert!(matches!(next(&mut events).await, PollEvent::Updated(_)));
    assert_eq!(ctl.call_count(Feed::Sessions).await, 1);

    // tick at 20s starts the next poll
    assert!(matches!(next(&mut events).await, PollEvent::Skipped));
    assert!(matches!(next(&mut events).await, PollEvent::Updated(_)));
    assert_eq!(ctl.call_count(Feed::Sessions).await, 2);
    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn manual_refresh_works_with_auto_disabled() {
    let (mock, ctl) = primed_mock().await;
    let cfg = PollerConfig {
        auto: false,
        ..PollerConfig::default()
    };
    let (handle, mut events) = Poller::spawn(paddock(mock, Duration::ZERO), cfg);

    let quiet = tokio::time::timeout(Duration::from_secs(60), events.recv()).await;
    assert!(quiet.is_err(), "no timer polls while auto is off");
    assert_eq!(ctl.call_count(Feed::Sessions).await, 0);

    assert!(handle.refresh_now().await);
    assert!(matches!(next(&mut events).await, PollEvent::Updated(_)));
    assert!(handle.refresh_now().await);
    assert!(matches!(next(&mut events).await, PollEvent::Updated(_)));
    // manual polls force race control even though the cache is warm
    assert_eq!(ctl.call_count(Feed::RaceControl).await, 2);

    assert!(handle.set_auto(true).await);
    let start = Instant::now();
    assert!(matches!(next(&mut events).await, PollEvent::Updated(_)));
    assert!(start.elapsed() >= Duration::from_secs(10));
    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn repeated_refreshes_merge_into_one_poll() {
    let (mock, ctl) = primed_mock().await;
    let cfg = PollerConfig {
        auto: false,
        ..PollerConfig::default()
    };
    let (handle, mut events) = Poller::spawn(paddock(mock, Duration::from_secs(1)), cfg);

    for _ in 0..5 {
        assert!(handle.refresh_now().await);
    }
    assert!(matches!(next(&mut events).await, PollEvent::Updated(_)));
    let quiet = tokio::time::timeout(Duration::from_secs(60), events.recv()).await;
    assert!(quiet.is_err(), "merged refreshes must not queue more polls");
    assert_eq!(ctl.call_count(Feed::Sessions).await, 1);

    // once the merged poll is done a new refresh runs again
    assert!(handle.refresh_now().await);
    assert!(matches!(next(&mut events).await, PollEvent::Updated(_)));
    assert_eq!(ctl.call_count(Feed::Sessions).await, 2);
    handle.stop().await;
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_stops_polling() {
    let (mock, ctl) = primed_mock().await;
    let cfg = PollerConfig {
        auto: false,
        ..PollerConfig::default()
    };
    let (handle, mut events) = Poller::spawn(paddock(mock, Duration::ZERO), cfg);
    assert!(!handle.is_finished());
    drop(handle);

    assert!(events.recv().await.is_none());
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(ctl.call_count(Feed::Sessions).await, 0);
}
