//! Intent/reducer/state primitives shared by the store and the views.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ subscribers / render
//! ```

/// A command or event fed to a [`Reducer`].
pub trait Intent: Send + 'static {}

/// A snapshot value. Transitions produce a new value instead of mutating
/// the old one, so snapshots can be compared and shared freely.
pub trait State: Clone + PartialEq + Default + Send + 'static {}

/// The only place state transitions happen.
pub trait Reducer {
    type State: State;
    type Intent: Intent;

    /// Pure `(state, intent) -> state`.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Apply `intents` in order.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
