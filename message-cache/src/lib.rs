//! Message cache crate: bounded, id-ordered storage for recently seen
//! messages, plus its snapshot round-trip.
//!
//! ## Modules
//!
//! - [`models`] – MessageRecord, Attachment, CacheStats
//! - [`cache`] – MessageCache (ordered, bounded, lock-guarded)
//! - [`snapshot`] – JSON snapshot codec and file helpers

mod cache;
mod models;
pub mod snapshot;

pub use cache::MessageCache;
pub use models::{
    Attachment, CacheStats, MessageRecord, EMPTY_CONTENT_PLACEHOLDER, ID_EPOCH_MS,
    ID_TIMESTAMP_SHIFT,
};
pub use snapshot::SnapshotError;
