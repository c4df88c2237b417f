//! Live ingestion of newly created messages.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use message_cache::MessageCache;
use tracing::{debug, info};
use vigil_core::IncomingMessage;

/// Cache stats are logged once per this many accepted messages.
const STATS_LOG_EVERY: u64 = 100;

/// Caches newly observed messages in arrival order.
pub struct IngestHandler {
    cache: Arc<MessageCache>,
    ignored_channels: HashSet<u64>,
    accepted: AtomicU64,
}

impl IngestHandler {
    pub fn new(cache: Arc<MessageCache>, ignored_channels: HashSet<u64>) -> Self {
        Self {
            cache,
            ignored_channels,
            accepted: AtomicU64::new(0),
        }
    }

    /// Handles one created-message event. Messages in ignored channels are
    /// dropped before they reach the cache.
    pub fn handle(&self, message: IncomingMessage) {
        if self.ignored_channels.contains(&message.channel_id) {
            debug!(
                id = message.id,
                channel_id = message.channel_id,
                "ignored channel, not cached"
            );
            return;
        }

        self.cache.push_latest(message.into_record());

        let accepted = self.accepted.fetch_add(1, Ordering::Relaxed) + 1;
        if accepted % STATS_LOG_EVERY == 0 {
            let stats = self.cache.stats();
            info!(
                entries = stats.entries,
                approx_bytes = stats.approx_bytes,
                "cache stats"
            );
        }
    }
}
