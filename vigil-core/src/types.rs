//! Wire-level event types delivered by the message source.

use message_cache::{Attachment, MessageRecord};
use serde::{Deserialize, Serialize};

/// Full message payload as it appears on the wire. Optional fields default
/// so partial payloads still parse; normalization happens in
/// [`IncomingMessage::into_record`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub id: u64,
    pub channel_id: u64,
    pub author_id: u64,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub sticker_id: Option<u64>,
    #[serde(default)]
    pub attachments: Vec<AttachmentPayload>,
}

/// Attachment as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentPayload {
    pub url: String,
    #[serde(default)]
    pub spoiler: bool,
}

impl IncomingMessage {
    /// Builds the normalized cache record: empty bodies become the
    /// placeholder, attachment order is preserved.
    pub fn into_record(self) -> MessageRecord {
        let attachments = self
            .attachments
            .into_iter()
            .map(|a| Attachment {
                url: a.url,
                spoiler: a.spoiler,
            })
            .collect();
        MessageRecord::new(
            self.id,
            self.channel_id,
            self.author_id,
            self.content,
            self.sticker_id,
            attachments,
        )
    }
}

/// One event from the message source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GatewayEvent {
    /// A new message was observed.
    MessageCreated { message: IncomingMessage },
    /// An existing message was edited; carries the full after-state.
    MessageUpdated { message: IncomingMessage },
    /// A message was deleted; only its identity is known.
    MessageDeleted { id: u64, channel_id: u64 },
}
