//! Delete notifications: report the last known state of a removed message.

use std::sync::Arc;

use message_cache::MessageCache;
use tracing::{debug, info};
use vigil_core::{LogSink, Result};

use crate::render;

/// Handles deleted-message events against the cache and the sink.
pub struct DeleteHandler {
    cache: Arc<MessageCache>,
    sink: Arc<dyn LogSink>,
}

impl DeleteHandler {
    pub fn new(cache: Arc<MessageCache>, sink: Arc<dyn LogSink>) -> Self {
        Self { cache, sink }
    }

    /// Removes the record and reports its last known content. Deletion
    /// events carry only an identity, so an uncached id means nothing can
    /// be reported.
    pub async fn handle(&self, id: u64, channel_id: u64) -> Result<()> {
        let Some(removed) = self.cache.remove(id) else {
            debug!(id, channel_id, "delete for uncached message, nothing to report");
            return Ok(());
        };

        self.sink
            .send(&render::delete_notification(&removed))
            .await?;
        info!(id, channel_id = removed.channel_id, "reported deleted message");
        Ok(())
    }
}
