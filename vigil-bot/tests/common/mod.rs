//! Recording sink for application-level tests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use vigil_core::{LogSink, Result};

/// Sink that forwards every sent text to the test over a channel.
pub struct MockSink {
    tx: mpsc::UnboundedSender<String>,
}

impl MockSink {
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
