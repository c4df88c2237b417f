//! Transport boundary traits.
//!
//! [`HistorySource`] is what backfill needs from the platform;
//! [`LogSink`] is where rendered notifications go. Implementations map to a
//! transport (or to recording mocks in tests).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use message_cache::MessageRecord;

use crate::error::Result;

/// Read access to per-channel message history, used during backfill.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Channels whose history can be scanned.
    async fn channels(&self) -> Result<Vec<u64>>;

    /// Messages in `channel_id` created strictly after `after`, in no
    /// particular order. Callers insert them through the sorted path.
    async fn messages_after(
        &self,
        channel_id: u64,
        after: DateTime<Utc>,
    ) -> Result<Vec<MessageRecord>>;
}

/// Destination for rendered edit/delete notifications and operational
/// messages.
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Delivers one rendered notification.
    async fn send(&self, text: &str) -> Result<()>;
}
