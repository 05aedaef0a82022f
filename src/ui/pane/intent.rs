use crate::mvi::Intent;
use crate::store::AccountId;

#[derive(Debug, Clone, PartialEq)]
pub enum PaneIntent {
    /// User picked an account from the list. Collapses the list.
    AccountSelected { id: AccountId },
    /// User pressed "Show More" / "Show Less".
    ToggleShowMore,
    /// An account disappeared from the store.
    AccountRemoved { id: AccountId },
}

impl Intent for PaneIntent {}
