//! Integration tests for [`vigil_handlers::Backfiller`].
//!
//! Covers per-channel resume points, self-sorting of out-of-order history,
//! idempotent re-runs, ignored channels, and unavailable-channel skipping.

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Duration, Utc};
use common::{id_at, MockHistorySource};
use message_cache::{MessageCache, MessageRecord};
use vigil_handlers::Backfiller;

fn record(id: u64, channel_id: u64, content: &str) -> MessageRecord {
    MessageRecord::new(id, channel_id, 42, content.to_string(), None, Vec::new())
}

/// **Test: Resume point prefers the cached newest timestamp per channel.**
///
/// **Setup:** Cache pre-seeded with a record in channel 1 created an hour
/// ago; channels 1 and 2 exposed; 7-day backlog.
/// **Action:** Run the backfiller.
/// **Expected:** Channel 1 is asked for history after the cached record's
/// creation time; channel 2 (nothing cached) after the 7-day horizon.
#[tokio::test]
async fn test_resume_point_per_channel() {
    let now = Utc::now();
    let cached = record(id_at(now - Duration::hours(1), 0), 1, "already here");
    let cached_at = cached.created_at();

    let cache = Arc::new(MessageCache::with_records(100, vec![cached]));
    let source = MockHistorySource::new(vec![1, 2], Vec::new());
    let backfiller = Backfiller::new(cache, HashSet::new(), 7);

    backfiller.run(&source).await.expect("backfill");

    let calls = source.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], (1, cached_at));

    let (channel, after) = calls[1];
    assert_eq!(channel, 2);
    let age = now - after;
    assert!(age > Duration::days(6), "horizon should span the backlog");
    assert!(age < Duration::days(8), "horizon should not predate the backlog");
}

/// **Test: Out-of-order history self-sorts in the cache.**
///
/// **Setup:** Source serves three records for channel 1 in shuffled order.
/// **Action:** Run the backfiller on an empty cache.
/// **Expected:** Cache exports the ids in ascending order.
#[tokio::test]
async fn test_backfill_sorts_history() {
    let now = Utc::now();
    let a = record(id_at(now - Duration::minutes(30), 0), 1, "middle");
    let b = record(id_at(now - Duration::minutes(10), 0), 1, "newest");
    let c = record(id_at(now - Duration::minutes(50), 0), 1, "oldest");

    let cache = Arc::new(MessageCache::new(100));
    let source = MockHistorySource::new(vec![1], vec![a.clone(), b.clone(), c.clone()]);
    let backfiller = Backfiller::new(cache.clone(), HashSet::new(), 7);

    let inserted = backfiller.run(&source).await.expect("backfill");
    assert_eq!(inserted, 3);

    let ids: Vec<u64> = cache.export().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![c.id, a.id, b.id]);
}

/// **Test: Re-running backfill does not duplicate records.**
///
/// **Setup:** Source serves two records for channel 1.
/// **Action:** Run the backfiller twice over the same source.
/// **Expected:** Cache size stays 2.
#[tokio::test]
async fn test_backfill_rerun_is_idempotent() {
    let now = Utc::now();
    let records = vec![
        record(id_at(now - Duration::minutes(20), 0), 1, "one"),
        record(id_at(now - Duration::minutes(5), 0), 1, "two"),
    ];

    let cache = Arc::new(MessageCache::new(100));
    let source = MockHistorySource::new(vec![1], records);
    let backfiller = Backfiller::new(cache.clone(), HashSet::new(), 7);

    backfiller.run(&source).await.expect("first run");
    backfiller.run(&source).await.expect("second run");

    assert_eq!(cache.len(), 2);
}

/// **Test: Ignored channels are never scanned.**
///
/// **Setup:** Channels 1 and 9 exposed; 9 is ignored.
/// **Action:** Run the backfiller.
/// **Expected:** Only channel 1 was asked for history.
#[tokio::test]
async fn test_backfill_skips_ignored_channels() {
    let cache = Arc::new(MessageCache::new(100));
    let source = MockHistorySource::new(vec![1, 9], Vec::new());
    let backfiller = Backfiller::new(cache, HashSet::from([9]), 7);

    backfiller.run(&source).await.expect("backfill");

    let scanned: Vec<u64> = source.calls().iter().map(|(ch, _)| *ch).collect();
    assert_eq!(scanned, vec![1]);
}

/// **Test: An unavailable channel is skipped, not fatal.**
///
/// **Setup:** Channel 1 fails; channel 2 serves one record.
/// **Action:** Run the backfiller.
/// **Expected:** Run succeeds and the channel 2 record is cached.
#[tokio::test]
async fn test_backfill_survives_unavailable_channel() {
    let now = Utc::now();
    let ok_record = record(id_at(now - Duration::minutes(5), 0), 2, "made it");

    let cache = Arc::new(MessageCache::new(100));
    let source = MockHistorySource::new(vec![1, 2], vec![ok_record.clone()]).failing_on(1);
    let backfiller = Backfiller::new(cache.clone(), HashSet::new(), 7);

    let inserted = backfiller.run(&source).await.expect("backfill");
    assert_eq!(inserted, 1);
    assert_eq!(cache.get(ok_record.id).expect("cached").content, "made it");
}
