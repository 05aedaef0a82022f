use crate::mvi::Reducer;

use super::intent::PaneIntent;
use super::state::PaneState;

pub struct PaneReducer;

impl Reducer for PaneReducer {
    type State = PaneState;
    type Intent = PaneIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PaneIntent::AccountSelected { id } => PaneState {
                selected: Some(id),
                show_more: false,
                ..state
            },
            PaneIntent::ToggleShowMore => {
                if state.selected.is_none() {
                    return state;
                }
                PaneState {
                    show_more: !state.show_more,
                    ..state
                }
            }
            PaneIntent::AccountRemoved { id } => {
                if state.selected != Some(id) {
                    return state;
                }
                PaneState {
                    selected: None,
                    show_more: false,
                    ..state
                }
            }
        }
    }
}
