//! Three-state result of a remote read.

use crate::mvi::State;

/// What a view renders for a remote read: a spinner, the data, or an
/// error message.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The payload, set only after a successful resolution.
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// The error message, set only after a failed resolution.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Fetch state tagged with the request it belongs to.
///
/// `generation` increases with every `load`; results carrying an older
/// generation are stale and get dropped by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchStatus<T> {
    pub generation: u64,
    pub url: Option<String>,
    pub state: FetchState<T>,
}

impl<T> Default for FetchStatus<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            url: None,
            state: FetchState::Loading,
        }
    }
}

impl<T> State for FetchStatus<T> where T: Clone + PartialEq + Send + 'static {}
