//! Ordered bounded message cache.
//!
//! Records are kept in strictly ascending id order, bounded to a fixed
//! capacity with oldest-first eviction. One mutex covers the whole body of
//! every public operation, so a lookup-and-replace or lookup-and-remove can
//! never interleave with another mutation on the same id. Lookups hand out
//! clones, never references into the backing storage.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::debug;

use crate::models::{CacheStats, MessageRecord};

/// Concurrency-safe, id-ordered, capacity-bounded store of recently seen
/// messages.
pub struct MessageCache {
    capacity: usize,
    records: Mutex<VecDeque<MessageRecord>>,
}

impl MessageCache {
    /// Creates an empty cache holding at most `capacity` records.
    ///
    /// `capacity` must be positive.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "cache capacity must be positive");
        Self {
            capacity,
            records: Mutex::new(VecDeque::new()),
        }
    }

    /// Creates a cache seeded from an already-ordered sequence, typically a
    /// decoded snapshot. The seed is trusted to be in ascending id order; if
    /// it exceeds `capacity` the oldest entries are dropped.
    pub fn with_records(capacity: usize, seed: Vec<MessageRecord>) -> Self {
        assert!(capacity > 0, "cache capacity must be positive");
        let mut records: VecDeque<MessageRecord> = seed.into();
        while records.len() > capacity {
            records.pop_front();
        }
        Self {
            capacity,
            records: Mutex::new(records),
        }
    }

    /// Maximum number of records the cache will hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a record observed in arrival order (live ingestion).
    ///
    /// A record content-equal to the current tail is dropped: that is a
    /// duplicate redelivery of the same event. An id that does not follow
    /// the tail takes the sorted-insert path instead, so the ordering
    /// invariant survives callers racing for the lock.
    pub fn push_latest(&self, record: MessageRecord) {
        let mut records = self.records.lock();
        if let Some(last) = records.back() {
            if last.content_equal(&record) {
                debug!(id = record.id, "duplicate tail record dropped");
                return;
            }
            if record.id <= last.id {
                Self::place_sorted(&mut records, record);
                self.evict_overflow(&mut records);
                return;
            }
        }
        records.push_back(record);
        self.evict_overflow(&mut records);
    }

    /// Inserts a record whose arrival order is untrusted (backfill).
    ///
    /// Redelivery of an already-cached record is a no-op, so backfill is
    /// idempotent. A cached id with different content is replaced in place:
    /// duplicate ids are forbidden, and the source's latest view wins.
    pub fn insert_sorted(&self, record: MessageRecord) {
        let mut records = self.records.lock();
        Self::place_sorted(&mut records, record);
        self.evict_overflow(&mut records);
    }

    /// Returns a copy of the record with this id, if cached. Absence is the
    /// normal "nothing cached" outcome, not a failure.
    pub fn get(&self, id: u64) -> Option<MessageRecord> {
        let records = self.records.lock();
        records
            .binary_search_by(|r| r.id.cmp(&id))
            .ok()
            .map(|pos| records[pos].clone())
    }

    /// Atomically swaps the cached record with the same id for `record` and
    /// returns the previous value, the "before" state an edit notification
    /// needs. An absent id stays absent: an edit to a message that was never
    /// cached has no before-state to report.
    pub fn replace(&self, record: MessageRecord) -> Option<MessageRecord> {
        let mut records = self.records.lock();
        match records.binary_search_by(|r| r.id.cmp(&record.id)) {
            Ok(pos) => Some(std::mem::replace(&mut records[pos], record)),
            Err(_) => None,
        }
    }

    /// Atomically removes the record with this id and returns it, the last
    /// known state a delete notification needs.
    pub fn remove(&self, id: u64) -> Option<MessageRecord> {
        let mut records = self.records.lock();
        records
            .binary_search_by(|r| r.id.cmp(&id))
            .ok()
            .and_then(|pos| records.remove(pos))
    }

    /// Creation time of the newest cached record in `channel_id`, or in any
    /// channel when `None`. Returns `DateTime::<Utc>::MIN_UTC` when nothing
    /// matches, so callers can take a `max()` against their own horizon.
    /// Worst case walks the whole cache, which is bounded by capacity.
    pub fn newest_timestamp(&self, channel_id: Option<u64>) -> DateTime<Utc> {
        let records = self.records.lock();
        records
            .iter()
            .rev()
            .find(|r| channel_id.map_or(true, |c| r.channel_id == c))
            .map(|r| r.created_at())
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Full ordered contents as an owned snapshot, for persistence.
    pub fn export(&self) -> Vec<MessageRecord> {
        self.records.lock().iter().cloned().collect()
    }

    /// Current number of cached records.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Entry count and approximate byte footprint.
    pub fn stats(&self) -> CacheStats {
        let records = self.records.lock();
        CacheStats {
            entries: records.len(),
            approx_bytes: records.iter().map(|r| r.approx_size()).sum(),
        }
    }

    /// Binary-searches the insertion point by id. Existing id: no-op when
    /// content-equal, in-place replacement otherwise. New id: positional
    /// insert keeping strict ascending order.
    fn place_sorted(records: &mut VecDeque<MessageRecord>, record: MessageRecord) {
        match records.binary_search_by(|r| r.id.cmp(&record.id)) {
            Ok(pos) => {
                if !records[pos].content_equal(&record) {
                    records[pos] = record;
                }
            }
            Err(pos) => records.insert(pos, record),
        }
    }

    /// Pops from the head (smallest id, oldest) until the bound holds.
    /// A size above capacity after this is a bug, not a runtime condition.
    fn evict_overflow(&self, records: &mut VecDeque<MessageRecord>) {
        while records.len() > self.capacity {
            if let Some(evicted) = records.pop_front() {
                debug!(id = evicted.id, "evicted oldest record over capacity");
            }
        }
        debug_assert!(records.len() <= self.capacity);
    }
}
