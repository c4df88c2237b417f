//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vigil")]
#[command(about = "Watches a message stream and reports edits and deletions", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the watchdog against an event feed (config from env).
    Run {
        /// JSON-lines GatewayEvent file; reads stdin when omitted.
        #[arg(long)]
        feed: Option<PathBuf>,

        /// JSON-lines MessageRecord history file used for backfill.
        #[arg(long)]
        history: Option<PathBuf>,
    },
}
