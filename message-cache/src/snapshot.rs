//! Snapshot codec: the cache's persistence round-trip.
//!
//! The persisted form is a JSON array of records with stable field names,
//! order preserved. Encoding operates on an exported copy of the cache, so
//! no file or serialization work ever happens under the cache lock.
//! Malformed input decodes to an error, never to a partial sequence.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::MessageRecord;

/// Failures of the snapshot round-trip.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Encodes an ordered record sequence to its persisted form.
pub fn encode(records: &[MessageRecord]) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Decodes a full snapshot. Returns [`SnapshotError::Decode`] on malformed
/// input; callers fall back to an empty cache, the snapshot is an aid and
/// not a source of truth.
pub fn decode(data: &str) -> Result<Vec<MessageRecord>, SnapshotError> {
    Ok(serde_json::from_str(data)?)
}

/// Writes an encoded snapshot to `path`, creating parent directories.
pub fn save(path: impl AsRef<Path>, records: &[MessageRecord]) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, encode(records)?)?;
    Ok(())
}

/// Reads and decodes the snapshot at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<MessageRecord>, SnapshotError> {
    let data = fs::read_to_string(path)?;
    decode(&data)
}
