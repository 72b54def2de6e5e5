// src/file/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to decode stored analyses: {0}")]
    Decode(#[from] ron::error::SpannedError),

    #[error("Failed to encode analyses: {0}")]
    Encode(#[from] ron::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
