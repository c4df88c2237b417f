//! File-backed history source for backfill.
//!
//! Replay/development stand-in for the platform history API: one
//! `MessageRecord` per line. The production transport adapter implements
//! the same [`HistorySource`] trait out of tree.

use std::collections::BTreeSet;
use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use message_cache::MessageRecord;
use tracing::info;
use vigil_core::{HistorySource, Result, VigilError};

/// [`HistorySource`] over a JSON-lines file of records, loaded up front.
#[derive(Debug)]
pub struct JsonlHistorySource {
    records: Vec<MessageRecord>,
}

impl JsonlHistorySource {
    /// Reads the whole file; every non-empty line must be one record.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;

        let mut records = Vec::new();
        for (n, line) in data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let record: MessageRecord = serde_json::from_str(line).map_err(|e| {
                VigilError::Gateway(format!("history file line {}: {}", n + 1, e))
            })?;
            records.push(record);
        }

        info!(records = records.len(), path = %path.display(), "loaded history file");
        Ok(Self { records })
    }
}

#[async_trait]
impl HistorySource for JsonlHistorySource {
    async fn channels(&self) -> Result<Vec<u64>> {
        let ids: BTreeSet<u64> = self.records.iter().map(|r| r.channel_id).collect();
        Ok(ids.into_iter().collect())
    }

    async fn messages_after(
        &self,
        channel_id: u64,
        after: DateTime<Utc>,
    ) -> Result<Vec<MessageRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.channel_id == channel_id && r.created_at() > after)
            .cloned()
            .collect())
    }
}
