//! Binary entry: load env, parse CLI, wire the adapters, run the watchdog.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::io::BufReader;
use vigil_bot::{run_bot, BotConfig, Cli, Commands, ConsoleSink, JsonlHistorySource};
use vigil_core::{init_tracing, HistorySource, LogSink};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run { feed, history } => {
            let config = BotConfig::load()?;
            std::fs::create_dir_all("logs")?;
            init_tracing(&config.log_file)?;

            let history_source: Option<Arc<dyn HistorySource>> = match history {
                Some(path) => Some(Arc::new(JsonlHistorySource::open(path)?)),
                None => None,
            };
            let sink: Arc<dyn LogSink> = Arc::new(ConsoleSink);

            match feed {
                Some(path) => {
                    let file = tokio::fs::File::open(path).await?;
                    run_bot(config, BufReader::new(file), history_source, sink).await
                }
                None => {
                    run_bot(
                        config,
                        BufReader::new(tokio::io::stdin()),
                        history_source,
                        sink,
                    )
                    .await
                }
            }
        }
    }
}
