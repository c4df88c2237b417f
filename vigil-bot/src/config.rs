//! Process configuration, loaded from environment variables.

use std::collections::HashSet;
use std::env;

use anyhow::Result;

/// Runtime configuration. Every key has a default so a bare environment
/// runs a small local setup.
pub struct BotConfig {
    /// Cache capacity in records.
    pub max_messages: usize,
    /// How far back backfill is willing to scan.
    pub backlog_days: i64,
    pub snapshot_path: String,
    pub snapshot_interval_secs: u64,
    /// Whether to seed the cache from the snapshot file at startup.
    pub read_snapshot: bool,
    /// Channels whose messages are never cached.
    pub ignored_channels: HashSet<u64>,
    pub log_file: String,
}

impl BotConfig {
    /// Loads configuration from the environment. Malformed numeric values
    /// fall back to the default for that key.
    pub fn load() -> Result<Self> {
        let max_messages = parse_env("VIGIL_MAX_MESSAGES").unwrap_or(5000);
        let backlog_days = parse_env("VIGIL_BACKLOG_DAYS").unwrap_or(7);
        let snapshot_path = env::var("VIGIL_SNAPSHOT_PATH")
            .unwrap_or_else(|_| ".cache/messages.json".to_string());
        let snapshot_interval_secs = parse_env("VIGIL_SNAPSHOT_INTERVAL_SECS").unwrap_or(3600);
        let read_snapshot = parse_env("VIGIL_READ_SNAPSHOT").unwrap_or(true);
        let ignored_channels =
            parse_id_list(&env::var("VIGIL_IGNORED_CHANNELS").unwrap_or_default());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/vigil-bot.log".to_string());

        Ok(Self {
            max_messages,
            backlog_days,
            snapshot_path,
            snapshot_interval_secs,
            read_snapshot,
            ignored_channels,
            log_file,
        })
    }

    /// Rejects values the cache and snapshot task cannot be built from.
    pub fn validate(&self) -> Result<()> {
        if self.max_messages == 0 {
            anyhow::bail!("VIGIL_MAX_MESSAGES must be positive");
        }
        if self.snapshot_interval_secs == 0 {
            anyhow::bail!("VIGIL_SNAPSHOT_INTERVAL_SECS must be positive");
        }
        if self.backlog_days < 0 {
            anyhow::bail!("VIGIL_BACKLOG_DAYS must not be negative");
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

/// Parses a comma-separated id list; empty parts and junk are dropped.
fn parse_id_list(raw: &str) -> HashSet<u64> {
    raw.split(',')
        .filter_map(|part| {
            let part = part.trim();
            if part.is_empty() {
                None
            } else {
                part.parse().ok()
            }
        })
        .collect()
}
