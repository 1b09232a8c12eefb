use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracker_core::model::{ProgressError, ProgressState};

use crate::json_file::JsonFileRepository;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of the progress blob.
///
/// This mirrors the domain `ProgressState` so repositories can
/// serialize/deserialize without leaking storage concerns into the domain
/// layer. Lengths are not trusted here; `into_state` validates against the
/// current catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub read: Vec<bool>,
    pub notes: Vec<String>,
}

impl ProgressRecord {
    #[must_use]
    pub fn from_state(state: &ProgressState) -> Self {
        Self {
            read: state.read_flags().to_vec(),
            notes: state.notes().to_vec(),
        }
    }

    /// Convert the record back into a domain `ProgressState`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::LengthMismatch` if either vector does not
    /// match `catalog_len`.
    pub fn into_state(self, catalog_len: usize) -> Result<ProgressState, ProgressError> {
        ProgressState::from_parts(self.read, self.notes, catalog_len)
    }
}

/// Repository contract for the single progress blob.
///
/// There is exactly one entry; `save` overwrites it whole, with no partial
/// update and no write coalescing.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Read the persisted blob, or `None` if nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the blob exists but cannot be read or parsed.
    async fn load(&self) -> Result<Option<ProgressRecord>, StorageError>;

    /// Overwrite the persisted blob.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the blob cannot be written.
    async fn save(&self, record: &ProgressRecord) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and for degraded
/// (in-memory-only) operation.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    blob: Arc<Mutex<Option<ProgressRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load(&self) -> Result<Option<ProgressRecord>, StorageError> {
        let guard = self.blob.lock().map_err(|e| StorageError::Io(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let mut guard = self.blob.lock().map_err(|e| StorageError::Io(e.to_string()))?;
        *guard = Some(record.clone());
        Ok(())
    }
}

/// Aggregates the progress repository behind a trait object for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            progress: Arc::new(InMemoryRepository::new()),
        }
    }

    #[must_use]
    pub fn json_file(data_dir: impl AsRef<Path>) -> Self {
        Self {
            progress: Arc::new(JsonFileRepository::new(data_dir)),
        }
    }
}
