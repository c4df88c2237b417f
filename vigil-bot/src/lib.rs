//! # vigil-bot
//!
//! Application crate for the watchdog: configuration, CLI, the JSON-lines
//! feed and history adapters, the console sink, and the composition root
//! wiring the cache, handlers, snapshot task, and feed together.

pub mod cli;
pub mod config;
pub mod feed;
pub mod history;
pub mod runner;
pub mod sink;

pub use cli::{Cli, Commands};
pub use config::BotConfig;
pub use history::JsonlHistorySource;
pub use runner::{load_cache, run_bot};
pub use sink::ConsoleSink;
