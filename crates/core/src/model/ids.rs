use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for an essay row: its position in the catalog sequence.
///
/// Row ordering is stable for the lifetime of a session (no reordering or
/// filtering), so the position is the identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EssayId(usize);

impl EssayId {
    /// Creates a new `EssayId` from a catalog position.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying catalog position.
    #[must_use]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for EssayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EssayId({})", self.0)
    }
}

impl fmt::Display for EssayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
