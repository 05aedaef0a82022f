use std::marker::PhantomData;

use crate::mvi::Reducer;

use super::intent::FetchIntent;
use super::state::{FetchState, FetchStatus};

/// Error message left behind by [`FetchIntent::Cancelled`].
pub const CANCELLED: &str = "Request cancelled";

/// Reducer for [`FetchStatus`].
///
/// A resolution is applied only if it belongs to the current generation
/// and the state is still loading, so each request resolves at most once
/// and a slow response for an old URL can never overwrite a newer one.
pub struct FetchReducer<T>(PhantomData<T>);

impl<T> Reducer for FetchReducer<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    type State = FetchStatus<T>;
    type Intent = FetchIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FetchIntent::Start { generation, url } => FetchStatus {
                generation,
                url: Some(url),
                state: FetchState::Loading,
            },

            FetchIntent::Resolved { generation, data } => {
                if generation != state.generation || !state.state.is_loading() {
                    return state;
                }
                FetchStatus {
                    state: FetchState::Loaded(data),
                    ..state
                }
            }

            FetchIntent::Failed {
                generation,
                message,
            } => {
                if generation != state.generation || !state.state.is_loading() {
                    return state;
                }
                FetchStatus {
                    state: FetchState::Failed(message),
                    ..state
                }
            }

            FetchIntent::Cancelled { generation } => {
                if generation != state.generation || !state.state.is_loading() {
                    return state;
                }
                FetchStatus {
                    state: FetchState::Failed(CANCELLED.to_string()),
                    ..state
                }
            }
        }
    }
}
