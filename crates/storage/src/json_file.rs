use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::repository::{ProgressRecord, ProgressRepository, StorageError};

/// Versioned storage key. Bump the suffix to rotate the on-disk format
/// instead of migrating in place.
pub const STORAGE_FILE: &str = "essay_progress_v2.json";

/// File-backed repository: one JSON blob under a fixed, versioned filename
/// in the data directory.
#[derive(Clone, Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(STORAGE_FILE),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProgressRepository for JsonFileRepository {
    async fn load(&self) -> Result<Option<ProgressRecord>, StorageError> {
        let body = match tokio::fs::read_to_string(&self.path).await {
            Ok(body) => body,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StorageError::Io(err.to_string())),
        };

        let record = serde_json::from_str(&body)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(record))
    }

    async fn save(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let body = serde_json::to_string(record)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        tokio::fs::write(&self.path, body)
            .await
            .map_err(|err| StorageError::Io(err.to_string()))
    }
}
