//! Edit notifications: recover the cached before-state and report the diff.

use std::sync::Arc;

use message_cache::MessageCache;
use tracing::{debug, info};
use vigil_core::{IncomingMessage, LogSink, Result};

use crate::render;

/// Handles edited-message events against the cache and the sink.
pub struct EditHandler {
    cache: Arc<MessageCache>,
    sink: Arc<dyn LogSink>,
}

impl EditHandler {
    pub fn new(cache: Arc<MessageCache>, sink: Arc<dyn LogSink>) -> Self {
        Self { cache, sink }
    }

    /// Swaps the cached record for the after-state and, when the before
    /// state exists and differs visibly, sends a before/after notification.
    /// A content-equal replacement (e.g. an embed-only refresh) stays
    /// silent. An uncached id means no before-state exists to report.
    pub async fn handle(&self, message: IncomingMessage) -> Result<()> {
        let after = message.into_record();

        let Some(before) = self.cache.replace(after.clone()) else {
            debug!(id = after.id, "edit for uncached message, nothing to report");
            return Ok(());
        };

        if before.content_equal(&after) {
            debug!(id = after.id, "edit changed nothing visible, staying silent");
            return Ok(());
        }

        self.sink
            .send(&render::edit_notification(&before, &after))
            .await?;
        info!(
            id = after.id,
            channel_id = after.channel_id,
            "reported edited message"
        );
        Ok(())
    }
}
