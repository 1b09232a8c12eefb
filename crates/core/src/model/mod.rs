mod essay;
mod ids;
mod progress;

pub use essay::{EssayDraft, EssayError, EssayRecord};
pub use ids::EssayId;
pub use progress::{ProgressError, ProgressState};
