use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the in-memory store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("cat index {index} is out of range (catalog has {len} cats)")]
    OutOfRange { index: usize, len: usize },
}

/// Errors raised while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog contains no cats")]
    Empty,
    #[error("cat {index} has a blank {field}")]
    BlankField { index: usize, field: &'static str },
}
