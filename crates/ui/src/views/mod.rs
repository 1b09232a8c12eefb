mod essays;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use essays::EssayListView;
pub use state::{ViewError, ViewState, view_state_from_resource};
