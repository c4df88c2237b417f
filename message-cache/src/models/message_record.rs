//! Message record model: the cached unit of content.
//!
//! Ordering between records is by `id` only and lives at the cache's
//! binary-search call sites; [`MessageRecord::content_equal`] is the separate
//! predicate for "did this edit change anything visible". The derived
//! `PartialEq` compares every field and exists for test assertions.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Millisecond epoch offset stored in the high bits of message ids.
pub const ID_EPOCH_MS: u64 = 1_420_070_400_000;

/// Number of id bits below the timestamp portion.
pub const ID_TIMESTAMP_SHIFT: u32 = 22;

/// Stored instead of an empty body so consumers never see an empty string.
pub const EMPTY_CONTENT_PLACEHOLDER: &str = "*[Empty message]*";

/// One attachment: url plus whether it was posted behind a spoiler cover.
/// Attachment order on a message is meaningful and preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub url: String,
    #[serde(default)]
    pub spoiler: bool,
}

/// One observed message. `id` is immutable and is the sole ordering and
/// lookup key; the cache replaces records wholesale on edit and removes
/// them wholesale on delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: u64,
    pub channel_id: u64,
    pub author_id: u64,
    pub content: String,
    #[serde(default)]
    pub sticker_id: Option<u64>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl MessageRecord {
    /// Creates a record, normalizing an empty body to
    /// [`EMPTY_CONTENT_PLACEHOLDER`].
    pub fn new(
        id: u64,
        channel_id: u64,
        author_id: u64,
        content: String,
        sticker_id: Option<u64>,
        attachments: Vec<Attachment>,
    ) -> Self {
        let content = if content.is_empty() {
            EMPTY_CONTENT_PLACEHOLDER.to_string()
        } else {
            content
        };
        Self {
            id,
            channel_id,
            author_id,
            content,
            sticker_id,
            attachments,
        }
    }

    /// Creation time decoded from the id's high bits. There is no separate
    /// timestamp field; the id is the clock.
    pub fn created_at(&self) -> DateTime<Utc> {
        let millis = (self.id >> ID_TIMESTAMP_SHIFT) + ID_EPOCH_MS;
        Utc.timestamp_millis_opt(millis as i64)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// True when an edit carrying `other` would change nothing a reader can
    /// see: same id, body, sticker, and attachment sequence (urls and
    /// spoiler flags). Channel and author never change after creation, so
    /// they do not participate.
    pub fn content_equal(&self, other: &Self) -> bool {
        self.id == other.id
            && self.content == other.content
            && self.sticker_id == other.sticker_id
            && self.attachments == other.attachments
    }

    /// Approximate in-memory footprint in bytes (struct plus heap content).
    /// Feeds [`crate::CacheStats`].
    pub fn approx_size(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.content.len()
            + self
                .attachments
                .iter()
                .map(|a| std::mem::size_of::<Attachment>() + a.url.len())
                .sum::<usize>()
    }
}
