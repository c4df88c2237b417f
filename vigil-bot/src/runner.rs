//! Composition root: seed the cache, backfill, start the snapshot task,
//! then drive the feed until it closes.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use message_cache::{snapshot, MessageCache};
use tokio::io::AsyncBufRead;
use tracing::{error, info, warn};
use vigil_core::{HistorySource, LogSink};
use vigil_handlers::{Backfiller, DeleteHandler, EditHandler, EventRouter, IngestHandler};

use crate::config::BotConfig;
use crate::feed;

/// Builds the cache from the snapshot file. Any load or decode failure
/// means starting empty: the snapshot is a context aid, not a source of
/// truth, and a bad file must never keep the watchdog down.
pub fn load_cache(config: &BotConfig) -> MessageCache {
    if !config.read_snapshot {
        return MessageCache::new(config.max_messages);
    }

    let started = Instant::now();
    match snapshot::load(&config.snapshot_path) {
        Ok(records) => {
            info!(
                entries = records.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "loaded cache snapshot"
            );
            MessageCache::with_records(config.max_messages, records)
        }
        Err(e) => {
            warn!(
                path = %config.snapshot_path,
                error = %e,
                "could not load cache snapshot, starting empty"
            );
            MessageCache::new(config.max_messages)
        }
    }
}

/// Exports a copy and writes it. The export happens under the cache lock;
/// encoding and the write do not. Failures are logged and retried on the
/// next interval.
fn write_snapshot(cache: &MessageCache, path: &str) {
    let started = Instant::now();
    let records = cache.export();
    match snapshot::save(path, &records) {
        Ok(()) => info!(
            entries = records.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "wrote cache snapshot"
        ),
        Err(e) => error!(path = %path, error = %e, "failed to write cache snapshot"),
    }
}

fn spawn_snapshot_task(
    cache: Arc<MessageCache>,
    path: String,
    interval_secs: u64,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
        // the first tick completes immediately; skip it
        interval.tick().await;
        loop {
            interval.tick().await;
            write_snapshot(&cache, &path);
        }
    })
}

/// Runs the watchdog: snapshot seeding, optional backfill, the periodic
/// snapshot task, a startup announcement, then the feed loop. On feed EOF
/// the snapshot task is stopped and a final snapshot is written.
pub async fn run_bot<R>(
    config: BotConfig,
    feed_reader: R,
    history: Option<Arc<dyn HistorySource>>,
    sink: Arc<dyn LogSink>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    config.validate()?;

    let cache = Arc::new(load_cache(&config));
    info!(
        capacity = cache.capacity(),
        entries = cache.len(),
        "cache ready"
    );

    if let Some(source) = &history {
        let started = Instant::now();
        let backfiller = Backfiller::new(
            cache.clone(),
            config.ignored_channels.clone(),
            config.backlog_days,
        );
        let inserted = backfiller
            .run(source.as_ref())
            .await
            .map_err(|e| anyhow::anyhow!("backfill failed: {}", e))?;
        info!(
            inserted,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "backfill finished"
        );
    }

    let router = EventRouter::new(
        IngestHandler::new(cache.clone(), config.ignored_channels.clone()),
        EditHandler::new(cache.clone(), sink.clone()),
        DeleteHandler::new(cache.clone(), sink.clone()),
        sink.clone(),
    );

    let snapshot_task = spawn_snapshot_task(
        cache.clone(),
        config.snapshot_path.clone(),
        config.snapshot_interval_secs,
    );

    if let Err(e) = sink
        .send("vigil is up and monitoring edits and deletions")
        .await
    {
        warn!(error = %e, "could not announce startup");
    }

    let dispatched = feed::drive(feed_reader, &router).await?;
    info!(dispatched, "feed closed, shutting down");

    snapshot_task.abort();
    write_snapshot(&cache, &config.snapshot_path);
    Ok(())
}
