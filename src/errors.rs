use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::discover::Source;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid URL format: {input:?}")]
    InvalidUrlFormat { input: String },

    #[error("failed to fetch data from {provider}: {reason}")]
    FetchFailed { provider: Source, reason: String },

    #[error("error parsing {provider} response: {reason}")]
    ParseFailed { provider: Source, reason: String },

    #[error("could not write {}: {source}", path.display())]
    FileWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not load config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("scan did not finish within {secs}s")]
    Timeout { secs: u64 },

    #[error("scan cancelled")]
    Cancelled,

    #[error("scan task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
