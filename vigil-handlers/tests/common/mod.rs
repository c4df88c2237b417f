//! Recording mocks for the transport boundary.
//!
//! `MockSink` captures every rendered notification; `MockHistorySource`
//! serves canned records and records the resume timestamp it was asked for,
//! so tests can assert on both sides of the boundary without a transport.

// Each test binary uses the subset of mocks it needs.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use message_cache::{MessageRecord, ID_EPOCH_MS, ID_TIMESTAMP_SHIFT};
use tokio::sync::mpsc;
use vigil_core::{HistorySource, LogSink, Result, VigilError};

/// Sink that forwards every sent text to the test over a channel.
pub struct MockSink {
    tx: mpsc::UnboundedSender<String>,
}

impl MockSink {
    /// Creates the sink and hands the receiver to the test.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx }), rx)
    }
}

#[async_trait]
impl LogSink for MockSink {
    async fn send(&self, text: &str) -> Result<()> {
        let _ = self.tx.send(text.to_string());
        Ok(())
    }
}

/// History source over canned records; records each `messages_after` call.
pub struct MockHistorySource {
    channels: Vec<u64>,
    records: Vec<MessageRecord>,
    /// Channel whose history request fails, to exercise the skip path.
    fail_channel: Option<u64>,
    calls: Mutex<Vec<(u64, DateTime<Utc>)>>,
}

impl MockHistorySource {
    pub fn new(channels: Vec<u64>, records: Vec<MessageRecord>) -> Self {
        Self {
            channels,
            records,
            fail_channel: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, channel_id: u64) -> Self {
        self.fail_channel = Some(channel_id);
        self
    }

    /// The `(channel_id, after)` arguments seen so far, in call order.
    pub fn calls(&self) -> Vec<(u64, DateTime<Utc>)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl HistorySource for MockHistorySource {
    async fn channels(&self) -> Result<Vec<u64>> {
        Ok(self.channels.clone())
    }

    async fn messages_after(
        &self,
        channel_id: u64,
        after: DateTime<Utc>,
    ) -> Result<Vec<MessageRecord>> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((channel_id, after));
        if self.fail_channel == Some(channel_id) {
            return Err(VigilError::Gateway("history unavailable".to_string()));
        }
        Ok(self
            .records
            .iter()
            .filter(|r| r.channel_id == channel_id && r.created_at() > after)
            .cloned()
            .collect())
    }
}

/// Builds an id whose decoded creation time is `time`, offset by `seq` to
/// keep ids unique within a millisecond.
pub fn id_at(time: DateTime<Utc>, seq: u64) -> u64 {
    let millis = time.timestamp_millis() as u64 - ID_EPOCH_MS;
    (millis << ID_TIMESTAMP_SHIFT) + seq
}
