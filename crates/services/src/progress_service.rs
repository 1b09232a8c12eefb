use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use storage::{ProgressRecord, ProgressRepository};
use tracker_core::model::ProgressState;

use crate::error::ProgressServiceError;

/// Load/save orchestration for the single progress blob.
///
/// `load` normalizes every recoverable failure to a fresh default state;
/// `save` writes the whole blob after each mutation. A failed write latches
/// the service into in-memory-only mode: state keeps working for the rest of
/// the session, later writes are skipped, and the UI shows a warning.
pub struct ProgressService {
    repo: Arc<dyn ProgressRepository>,
    degraded: AtomicBool,
}

impl ProgressService {
    #[must_use]
    pub fn new(repo: Arc<dyn ProgressRepository>) -> Self {
        Self {
            repo,
            degraded: AtomicBool::new(false),
        }
    }

    /// Load persisted progress, validated against the current catalog length.
    ///
    /// Absent, unreadable, unparsable, or length-mismatched persisted state
    /// all yield `ProgressState::fresh(catalog_len)`. Stale state is simply
    /// discarded, never migrated; calling this twice without an intervening
    /// save returns identical states.
    pub async fn load(&self, catalog_len: usize) -> ProgressState {
        match self.repo.load().await {
            Ok(Some(record)) => record
                .into_state(catalog_len)
                .unwrap_or_else(|_| ProgressState::fresh(catalog_len)),
            Ok(None) | Err(_) => ProgressState::fresh(catalog_len),
        }
    }

    /// Persist the whole state, overwriting the prior blob.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` on the first failed write.
    /// That failure also switches the service to in-memory-only mode, after
    /// which `save` succeeds trivially without touching storage.
    pub async fn save(&self, state: &ProgressState) -> Result<(), ProgressServiceError> {
        if self.degraded.load(Ordering::Acquire) {
            return Ok(());
        }

        let record = ProgressRecord::from_state(state);
        if let Err(err) = self.repo.save(&record).await {
            self.degraded.store(true, Ordering::Release);
            return Err(err.into());
        }
        Ok(())
    }

    /// Whether a storage failure has forced in-memory-only operation.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Acquire)
    }
}
