use std::io;
use thiserror::Error;

/// Failures of the durable snapshot slot. Always recovered locally.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("snapshot serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("snapshot slot is unavailable: {0}")]
    Unavailable(String),
}
