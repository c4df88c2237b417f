//! Gateway feed: JSON-lines events driving the router.

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};
use vigil_core::GatewayEvent;
use vigil_handlers::EventRouter;

/// Reads events line by line and dispatches each through the router.
/// Malformed lines are logged and skipped so one bad event cannot stall
/// ingestion; EOF ends the loop. Returns the number of dispatched events.
pub async fn drive<R>(reader: R, router: &EventRouter) -> Result<u64>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut dispatched = 0u64;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<GatewayEvent>(line) {
            Ok(event) => {
                router.dispatch(event).await;
                dispatched += 1;
            }
            Err(e) => warn!(error = %e, "skipping malformed feed line"),
        }
    }

    info!(dispatched, "feed ended");
    Ok(dispatched)
}
