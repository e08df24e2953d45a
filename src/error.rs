use quire_writer::WriteError;
use thiserror::Error;

/// Top-level error for building and saving documents.
#[derive(Error, Debug)]
pub enum QuireError {
    #[error("Writing failed: {0}")]
    Write(#[from] WriteError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),
}
