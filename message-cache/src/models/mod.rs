//! Data models: the message record and cache metrics.

mod cache_stats;
mod message_record;

pub use cache_stats::CacheStats;
pub use message_record::{
    Attachment, MessageRecord, EMPTY_CONTENT_PLACEHOLDER, ID_EPOCH_MS, ID_TIMESTAMP_SHIFT,
};
