use std::io;

/// Errors raised by tree queries and by the experiment driver.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A query was made on a tree with no nodes.
    #[error("query on an empty tree")]
    EmptyTree,
    /// `kth_largest` was asked for a rank outside `1..=len`.
    #[error("rank {rank} is outside 1..={len}")]
    InvalidRank { rank: usize, len: usize },
    /// Malformed experiment parameters.
    #[error("invalid experiment configuration: {0}")]
    InvalidConfiguration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
