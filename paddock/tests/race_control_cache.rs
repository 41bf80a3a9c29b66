mod helpers;

use helpers::*;
use paddock::{CacheOutcome, PaddockError, RaceControlCache, SessionKey};
use paddock_mock::{DynamicMockConnector, Feed, MockBehavior};

#[tokio::test]
async fn warm_cache_fetches_once_per_three_calls() {
    let (mock, ctl) = DynamicMockConnector::new_with_controller("dyn");
    let msgs = vec![rc(0, "RACE START"), rc(30, "DRS ENABLED")];
    ctl.set_race_control(MockBehavior::Return(msgs.clone())).await;

    let mut cache = RaceControlCache::new(3);
    // first call has nothing cached and always fetches
    assert_eq!(cache.get(mock.as_ref(), KEY, false).await, msgs);
    ctl.clear_calls().await;

    let mut outcomes = Vec::new();
    for _ in 0..3 {
        let read = cache.read(mock.as_ref(), KEY, false).await;
        assert_eq!(read.messages, msgs);
        outcomes.push(read.outcome);
    }
    assert_eq!(ctl.call_count(Feed::RaceControl).await, 1);
    // counters 2, 3, 4: only 3 is a multiple of the period
    assert_eq!(
        outcomes,
        vec![CacheOutcome::Cached, CacheOutcome::Fresh, CacheOutcome::Cached]
    );
    assert_eq!(cache.counter(), 4);
}

#[tokio::test]
async fn cached_array_is_returned_unchanged_between_refreshes() {
    let (mock, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_race_control(MockBehavior::Return(vec![rc(0, "A")])).await;
    let mut cache = RaceControlCache::default();
    cache.get(mock.as_ref(), KEY, false).await;

    ctl.set_race_control(MockBehavior::Return(vec![rc(0, "A"), rc(5, "B")]))
        .await;
    // counter 2: not due
    assert_eq!(cache.get(mock.as_ref(), KEY, false).await.len(), 1);
    // counter 3: due
    assert_eq!(cache.get(mock.as_ref(), KEY, false).await.len(), 2);
}

#[tokio::test]
async fn failed_refresh_serves_previous_array() {
    let (mock, ctl) = DynamicMockConnector::new_with_controller("dyn");
    let msgs = vec![rc(0, "RACE START")];
    ctl.set_race_control(MockBehavior::Return(msgs.clone())).await;
    let mut cache = RaceControlCache::new(1);
    cache.get(mock.as_ref(), KEY, false).await;

    let err = PaddockError::upstream_unavailable("/race_control", 502);
    ctl.set_race_control(MockBehavior::Fail(err.clone())).await;
    let read = cache.read(mock.as_ref(), KEY, false).await;
    assert_eq!(read.messages, msgs);
    assert_eq!(read.outcome, CacheOutcome::Stale(err));
    // the stale array stays cached
    assert_eq!(cache.cached(KEY), Some(msgs.as_slice()));
}

#[tokio::test]
async fn failed_first_fetch_yields_empty() {
    let (mock, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_race_control(MockBehavior::Fail(PaddockError::timeout("/race_control")))
        .await;
    let mut cache = RaceControlCache::default();
    assert!(cache.get(mock.as_ref(), KEY, false).await.is_empty());
    // nothing cached yet, so the next call retries instead of waiting a period
    cache.get(mock.as_ref(), KEY, false).await;
    assert_eq!(ctl.call_count(Feed::RaceControl).await, 2);
}

#[tokio::test]
async fn force_refresh_always_fetches() {
    let (mock, ctl) = DynamicMockConnector::new_with_controller("dyn");
    let mut cache = RaceControlCache::new(3);
    for _ in 0..4 {
        cache.get(mock.as_ref(), KEY, true).await;
    }
    assert_eq!(ctl.call_count(Feed::RaceControl).await, 4);
}

#[tokio::test]
async fn empty_answer_is_refetched_on_next_call() {
    let (mock, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_race_control(MockBehavior::Return(vec![])).await;
    let mut cache = RaceControlCache::new(3);
    assert!(cache.get(mock.as_ref(), KEY, false).await.is_empty());
    assert_eq!(cache.cached(KEY), Some(&[][..]));

    // first message of the session arrives before the period comes round
    ctl.set_race_control(MockBehavior::Return(vec![rc(0, "GREEN LIGHT")]))
        .await;
    let read = cache.read(mock.as_ref(), KEY, false).await;
    assert_eq!(read.messages.len(), 1);
    assert_eq!(read.outcome, CacheOutcome::Fresh);
    assert_eq!(ctl.call_count(Feed::RaceControl).await, 2);

    // non-empty now, so counter 3 fetches and counter 4 is served from cache
    cache.get(mock.as_ref(), KEY, false).await;
    cache.get(mock.as_ref(), KEY, false).await;
    assert_eq!(ctl.call_count(Feed::RaceControl).await, 3);
}

#[tokio::test]
async fn empty_cache_keeps_fetching_every_call() {
    let (mock, ctl) = DynamicMockConnector::new_with_controller("dyn");
    let mut cache = RaceControlCache::new(3);
    for _ in 0..4 {
        let read = cache.read(mock.as_ref(), KEY, false).await;
        assert_eq!(read.outcome, CacheOutcome::Fresh);
    }
    assert_eq!(ctl.call_count(Feed::RaceControl).await, 4);
}

#[tokio::test]
async fn switching_session_discards_cache() {
    let (mock, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_race_control(MockBehavior::Return(vec![rc(0, "OLD")])).await;
    let mut cache = RaceControlCache::new(3);
    cache.get(mock.as_ref(), KEY, false).await;

    let other = SessionKey(9999);
    ctl.set_race_control(MockBehavior::Fail(PaddockError::timeout("/race_control")))
        .await;
    // counter 2 is not due, but nothing is cached for the new session
    let read = cache.read(mock.as_ref(), other, false).await;
    assert!(read.messages.is_empty());
    assert!(matches!(read.outcome, CacheOutcome::Stale(_)));
    assert!(cache.cached(KEY).is_none());

    let sessions: Vec<_> = ctl.calls().await.iter().map(|c| c.session).collect();
    assert_eq!(sessions, vec![Some(KEY), Some(other)]);
}

#[test]
fn zero_period_is_clamped() {
    assert_eq!(RaceControlCache::new(0).every(), 1);
    assert_eq!(RaceControlCache::default().every(), 3);
}
