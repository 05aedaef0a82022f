//! Remote data fetcher.
//!
//! Generic GET-and-decode helper that tracks loading, data and error for
//! a view. No retry and no cache; a newer `load` cancels the older one.

mod client;
mod error;
mod fetcher;
mod intent;
mod reducer;
mod state;

pub use client::HttpClient;
pub use error::FetchError;
pub use fetcher::Fetcher;
pub use intent::FetchIntent;
pub use reducer::{FetchReducer, CANCELLED};
pub use state::{FetchState, FetchStatus};
