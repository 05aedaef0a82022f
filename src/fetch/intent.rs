use crate::mvi::Intent;

/// Events driving a [`super::FetchStatus`].
#[derive(Debug, Clone)]
pub enum FetchIntent<T> {
    /// A new request was issued; supersedes everything older.
    Start { generation: u64, url: String },

    /// The request for `generation` returned a payload.
    Resolved { generation: u64, data: T },

    /// The request for `generation` failed.
    Failed { generation: u64, message: String },

    /// The request for `generation` was aborted before it resolved.
    Cancelled { generation: u64 },
}

impl<T: Send + 'static> Intent for FetchIntent<T> {}
