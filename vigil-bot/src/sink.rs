//! Console sink: rendered notifications go to stdout.

use async_trait::async_trait;
use vigil_core::{LogSink, Result};

/// [`LogSink`] that prints each notification as one block, separated by a
/// blank line. Stands in for the platform log channel.
pub struct ConsoleSink;

#[async_trait]
impl LogSink for ConsoleSink {
    async fn send(&self, text: &str) -> Result<()> {
        println!("{}\n", text);
        Ok(())
    }
}
