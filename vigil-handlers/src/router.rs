//! Event dispatch: one router fans gateway events out to the handlers.

use std::sync::Arc;

use tracing::{debug, error};
use vigil_core::{GatewayEvent, LogSink, VigilError};

use crate::{DeleteHandler, EditHandler, IngestHandler};

/// Routes gateway events to the ingest/edit/delete handlers. Handler
/// failures are logged and reported on the sink; they never abort the feed
/// loop.
pub struct EventRouter {
    ingest: IngestHandler,
    edit: EditHandler,
    delete: DeleteHandler,
    sink: Arc<dyn LogSink>,
}

impl EventRouter {
    pub fn new(
        ingest: IngestHandler,
        edit: EditHandler,
        delete: DeleteHandler,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            ingest,
            edit,
            delete,
            sink,
        }
    }

    /// Dispatches one event to its handler.
    pub async fn dispatch(&self, event: GatewayEvent) {
        match event {
            GatewayEvent::MessageCreated { message } => {
                debug!(id = message.id, "event: message created");
                self.ingest.handle(message);
            }
            GatewayEvent::MessageUpdated { message } => {
                debug!(id = message.id, "event: message updated");
                let id = message.id;
                if let Err(e) = self.edit.handle(message).await {
                    self.report_failure("edit", id, e).await;
                }
            }
            GatewayEvent::MessageDeleted { id, channel_id } => {
                debug!(id, channel_id, "event: message deleted");
                if let Err(e) = self.delete.handle(id, channel_id).await {
                    self.report_failure("delete", id, e).await;
                }
            }
        }
    }

    /// Surfaces a handler failure on the sink so operators see it where the
    /// notifications go; a sink that is itself failing only gets logged.
    async fn report_failure(&self, kind: &str, id: u64, err: VigilError) {
        error!(kind, id, error = %err, "handler failed");
        let text = format!(
            "vigil hit an error while handling a {} event for message {}: {}",
            kind, id, err
        );
        if let Err(e) = self.sink.send(&text).await {
            error!(error = %e, "could not report handler failure on the sink");
        }
    }
}
