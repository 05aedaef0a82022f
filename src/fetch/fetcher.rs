//! One-request-at-a-time remote reader.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::mvi::Reducer;

use super::client::HttpClient;
use super::intent::FetchIntent;
use super::reducer::FetchReducer;
use super::state::{FetchState, FetchStatus};

/// Issues one GET per [`Fetcher::load`] and publishes the outcome as a
/// [`FetchState`].
///
/// Loading a new URL aborts the request still in flight; its result, if
/// it races the abort, is discarded by generation.
pub struct Fetcher<T> {
    client: HttpClient,
    status: Arc<watch::Sender<FetchStatus<T>>>,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
}

impl<T> Fetcher<T>
where
    T: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(client: HttpClient) -> Self {
        let (status, _) = watch::channel(FetchStatus::default());
        Self {
            client,
            status: Arc::new(status),
            generation: 0,
            in_flight: None,
        }
    }

    /// Start reading `url`. Must be called from within a Tokio runtime.
    pub fn load(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.abort_in_flight();

        self.generation += 1;
        let generation = self.generation;
        dispatch(
            &self.status,
            FetchIntent::Start {
                generation,
                url: url.clone(),
            },
        );
        tracing::debug!(%url, generation, "Fetch started");

        let client = self.client.clone();
        let status = Arc::clone(&self.status);
        self.in_flight = Some(tokio::spawn(async move {
            let intent = match client.get_json::<T>(&url).await {
                Ok(data) => {
                    tracing::debug!(%url, generation, "Fetch resolved");
                    FetchIntent::Resolved { generation, data }
                }
                Err(e) => {
                    tracing::warn!(%url, generation, error = %e, "Fetch failed");
                    FetchIntent::Failed {
                        generation,
                        message: e.to_string(),
                    }
                }
            };
            dispatch(&status, intent);
        }));
    }

    /// Abort the request in flight, if any.
    ///
    /// A request that had not resolved yet settles as failed with
    /// [`CANCELLED`](super::CANCELLED); a resolved one keeps its result.
    pub fn cancel(&mut self) {
        self.abort_in_flight();
        if self.generation == 0 {
            return;
        }
        dispatch(
            &self.status,
            FetchIntent::Cancelled {
                generation: self.generation,
            },
        );
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                tracing::debug!(generation = self.generation, "Aborting stale fetch");
            }
            handle.abort();
        }
    }

    pub fn state(&self) -> FetchState<T> {
        self.status.borrow().state.clone()
    }

    /// The URL of the most recent `load`, if any.
    pub fn url(&self) -> Option<String> {
        self.status.borrow().url.clone()
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<FetchStatus<T>> {
        self.status.subscribe()
    }

    /// Wait until the current request has resolved and return the result.
    ///
    /// Returns immediately with `Loading` if nothing was ever loaded.
    pub async fn settled(&self) -> FetchState<T> {
        if self.generation == 0 {
            return FetchState::Loading;
        }

        let mut receiver = self.status.subscribe();
        let settled = match receiver.wait_for(|status| !status.state.is_loading()).await {
            Ok(status) => status.state.clone(),
            Err(_) => self.state(),
        };
        settled
    }
}

impl<T> Drop for Fetcher<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

fn dispatch<T>(status: &watch::Sender<FetchStatus<T>>, intent: FetchIntent<T>)
where
    T: Clone + PartialEq + Send + 'static,
{
    status.send_if_modified(|current| {
        let next = FetchReducer::reduce(current.clone(), intent);
        if next == *current {
            return false;
        }
        *current = next;
        true
    });
}
