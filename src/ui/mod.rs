//! View layer: list-pane view-models, formatting and text rendering.

pub mod format;
pub mod pane;
pub mod render;
