use std::path::{Path, PathBuf};

use tracker_core::model::{EssayDraft, EssayRecord};

use crate::error::CatalogError;

/// Loads the static essay catalog: one read of a bundled JSON resource,
/// performed once during initialization.
#[derive(Clone, Debug)]
pub struct CatalogService {
    path: PathBuf,
}

impl CatalogService {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Read` if the file cannot be read,
    /// `CatalogError::Parse` if the body is not a JSON essay list, and
    /// `CatalogError::Invalid` for the first entry that fails validation.
    /// Callers treat any of these as fatal for initialization.
    pub async fn load(&self) -> Result<Vec<EssayRecord>, CatalogError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Read {
                path: self.path.display().to_string(),
                source,
            })?;

        let drafts: Vec<EssayDraft> = serde_json::from_str(&body)?;

        drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| CatalogError::Invalid { index, source })
            })
            .collect()
    }
}
