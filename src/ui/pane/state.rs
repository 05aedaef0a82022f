use crate::mvi::State;
use crate::store::AccountId;

/// Rows shown before the "Show More" toggle.
pub const DEFAULT_PREVIEW_LEN: usize = 2;

/// Selection state of a per-account list pane (movements, transfers).
#[derive(Debug, Clone, PartialEq)]
pub struct PaneState {
    pub selected: Option<AccountId>,
    pub show_more: bool,
    pub preview_len: usize,
}

impl Default for PaneState {
    fn default() -> Self {
        Self {
            selected: None,
            show_more: false,
            preview_len: DEFAULT_PREVIEW_LEN,
        }
    }
}

impl State for PaneState {}

impl PaneState {
    pub fn with_preview_len(preview_len: usize) -> Self {
        Self {
            preview_len: preview_len.max(1),
            ..Self::default()
        }
    }

    /// The rows to render out of `items`.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.show_more {
            items
        } else {
            &items[..items.len().min(self.preview_len)]
        }
    }

    /// Whether a list of `len` rows needs the toggle at all.
    pub fn has_more(&self, len: usize) -> bool {
        len > self.preview_len
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.show_more {
            "Show Less"
        } else {
            "Show More"
        }
    }
}
