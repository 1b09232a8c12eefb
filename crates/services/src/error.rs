//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;
use tracker_core::model::EssayError;

/// Errors emitted by `CatalogService`.
///
/// Any of these aborts initialization: the UI renders the message in place
/// of the essay list and does not retry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("could not read catalog file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog file is not a valid essay list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog entry {index} is invalid: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: EssayError,
    },
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
