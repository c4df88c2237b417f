//! Historical backfill: out-of-order insertion with per-channel resume.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Duration, Utc};
use message_cache::MessageCache;
use tracing::{info, warn};
use vigil_core::{HistorySource, Result};

/// Fills the cache from channel history after a restart or gap.
pub struct Backfiller {
    cache: Arc<MessageCache>,
    ignored_channels: HashSet<u64>,
    backlog_days: i64,
}

impl Backfiller {
    pub fn new(
        cache: Arc<MessageCache>,
        ignored_channels: HashSet<u64>,
        backlog_days: i64,
    ) -> Self {
        Self {
            cache,
            ignored_channels,
            backlog_days,
        }
    }

    /// Scans every channel the source exposes and inserts its messages
    /// through the sorted path (arrival order is untrusted here).
    ///
    /// The per-channel resume point is the later of the backlog horizon and
    /// the newest cached record for that channel, so history that survived
    /// in the snapshot is not fetched again. A channel whose history is
    /// unavailable is skipped, not fatal.
    pub async fn run(&self, source: &dyn HistorySource) -> Result<usize> {
        let horizon = Utc::now() - Duration::days(self.backlog_days);
        let mut inserted = 0usize;

        for channel_id in source.channels().await? {
            if self.ignored_channels.contains(&channel_id) {
                continue;
            }
            let after = self.cache.newest_timestamp(Some(channel_id)).max(horizon);
            info!(channel_id, %after, "backfilling channel");

            match source.messages_after(channel_id, after).await {
                Ok(batch) => {
                    for record in batch {
                        self.cache.insert_sorted(record);
                        inserted += 1;
                    }
                }
                Err(e) => {
                    warn!(channel_id, error = %e, "channel history unavailable, skipping");
                }
            }
        }

        info!(inserted, entries = self.cache.len(), "backfill complete");
        Ok(inserted)
    }
}
