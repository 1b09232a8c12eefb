use tracker_core::model::{EssayId, EssayRecord, ProgressError, ProgressState};

/// Row view-model: one catalog entry plus its typed row identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EssayRowVm {
    pub id: EssayId,
    pub title: String,
    pub url: String,
}

#[must_use]
pub fn map_essay_rows(essays: &[EssayRecord]) -> Vec<EssayRowVm> {
    essays
        .iter()
        .enumerate()
        .map(|(index, essay)| EssayRowVm {
            id: EssayId::new(index),
            title: essay.title().to_string(),
            url: essay.url().to_string(),
        })
        .collect()
}

/// Expanded/collapsed bits for the per-row note panels.
///
/// Purely visual session state: never persisted, independent of the read
/// flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotePanels {
    expanded: Vec<bool>,
}

impl NotePanels {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            expanded: vec![false; len],
        }
    }

    #[must_use]
    pub fn is_expanded(&self, id: EssayId) -> bool {
        self.expanded.get(id.index()).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, id: EssayId) {
        if let Some(bit) = self.expanded.get_mut(id.index()) {
            *bit = !*bit;
        }
    }
}

/// Semantic action tags for the row's interactive elements.
///
/// Each element is wired to exactly one intent when the row is built, so
/// routing never depends on inspecting the event target's ancestry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowIntent {
    /// Status indicator clicked: flip the read flag, nothing else.
    ToggleRead(EssayId),
    /// Row header clicked outside the indicator and link: show/hide notes.
    ToggleNotes(EssayId),
    /// The note text field changed.
    EditNote(EssayId, String),
    /// External link clicked; navigation is the browser's job.
    OpenLink(EssayId),
}

/// Whether an applied intent mutated persisted state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowEffect {
    Persist,
    None,
}

/// Apply one row intent to the in-memory state.
///
/// Returns `RowEffect::Persist` when the caller must write the progress blob
/// (after every read-flag flip and every note keystroke, with no batching).
///
/// # Errors
///
/// Returns `ProgressError` for out-of-range row ids.
pub fn apply_row_intent(
    state: &mut ProgressState,
    panels: &mut NotePanels,
    intent: RowIntent,
) -> Result<RowEffect, ProgressError> {
    match intent {
        RowIntent::ToggleRead(id) => {
            state.toggle_read(id)?;
            Ok(RowEffect::Persist)
        }
        RowIntent::ToggleNotes(id) => {
            panels.toggle(id);
            Ok(RowEffect::None)
        }
        RowIntent::EditNote(id, text) => {
            state.set_note(id, text)?;
            Ok(RowEffect::Persist)
        }
        RowIntent::OpenLink(_) => Ok(RowEffect::None),
    }
}
