use thiserror::Error;

#[derive(Error, Debug)]
pub enum VigilError {
    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Sink error: {0}")]
    Sink(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] message_cache::SnapshotError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VigilError>;
