use thiserror::Error;

use crate::model::EssayId;

/// Per-essay reading progress: a read flag and a free-text note, both indexed
/// in parallel with the catalog sequence.
///
/// Invariant: `read.len() == notes.len()` equals the catalog length for the
/// whole lifetime of the value. Construction enforces it; mutation never
/// changes either length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressState {
    read: Vec<bool>,
    notes: Vec<String>,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("essay index {index} out of range (catalog has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(
        "persisted progress does not match catalog: read={read_len}, notes={notes_len}, catalog={catalog_len}"
    )]
    LengthMismatch {
        read_len: usize,
        notes_len: usize,
        catalog_len: usize,
    },
}

impl ProgressState {
    /// A brand-new state for a catalog of `len` essays: nothing read, no notes.
    #[must_use]
    pub fn fresh(len: usize) -> Self {
        Self {
            read: vec![false; len],
            notes: vec![String::new(); len],
        }
    }

    /// Rebuild a state from persisted vectors, checked against the current
    /// catalog length.
    ///
    /// A mismatch in either vector invalidates the whole state: a catalog
    /// that changed size since the progress was written makes the stored
    /// indices meaningless.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::LengthMismatch` if either vector's length
    /// differs from `catalog_len`.
    pub fn from_parts(
        read: Vec<bool>,
        notes: Vec<String>,
        catalog_len: usize,
    ) -> Result<Self, ProgressError> {
        if read.len() != catalog_len || notes.len() != catalog_len {
            return Err(ProgressError::LengthMismatch {
                read_len: read.len(),
                notes_len: notes.len(),
                catalog_len,
            });
        }
        Ok(Self { read, notes })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read.is_empty()
    }

    /// Whether the essay at `id` is marked read. Out-of-range ids read as
    /// unread rather than panicking.
    #[must_use]
    pub fn is_read(&self, id: EssayId) -> bool {
        self.read.get(id.index()).copied().unwrap_or(false)
    }

    /// The note text for the essay at `id` (empty for out-of-range ids).
    #[must_use]
    pub fn note(&self, id: EssayId) -> &str {
        self.notes.get(id.index()).map_or("", String::as_str)
    }

    /// Flip the read flag for one essay and return the new value.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::IndexOutOfRange` if `id` is past the catalog.
    pub fn toggle_read(&mut self, id: EssayId) -> Result<bool, ProgressError> {
        let len = self.read.len();
        let flag = self
            .read
            .get_mut(id.index())
            .ok_or(ProgressError::IndexOutOfRange {
                index: id.index(),
                len,
            })?;
        *flag = !*flag;
        Ok(*flag)
    }

    /// Replace the note text for one essay.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::IndexOutOfRange` if `id` is past the catalog.
    pub fn set_note(
        &mut self,
        id: EssayId,
        text: impl Into<String>,
    ) -> Result<(), ProgressError> {
        let len = self.notes.len();
        let slot = self
            .notes
            .get_mut(id.index())
            .ok_or(ProgressError::IndexOutOfRange {
                index: id.index(),
                len,
            })?;
        *slot = text.into();
        Ok(())
    }

    #[must_use]
    pub fn read_flags(&self) -> &[bool] {
        &self.read
    }

    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}
