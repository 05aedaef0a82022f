//! Per-account list pane shared by the movements and transfers views.

mod intent;
mod reducer;
mod state;

pub use intent::PaneIntent;
pub use reducer::PaneReducer;
pub use state::{PaneState, DEFAULT_PREVIEW_LEN};
