//! The store snapshot.

use crate::mvi::State;

use super::model::{Account, AccountId, Deposit, Movement, Transfer};

/// Full state of the store at one point in time.
///
/// Snapshots are immutable once published: every mutation builds a new
/// `BankState` and the store swaps it in whole.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BankState {
    pub accounts: Vec<Account>,
    pub movements: Vec<Movement>,
    pub deposits: Vec<Deposit>,
    pub transfers: Vec<Transfer>,
}

impl State for BankState {}

impl BankState {
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    /// Movements posted against `account_id`, in posting order.
    pub fn movements_for(&self, account_id: AccountId) -> impl Iterator<Item = &Movement> {
        self.movements
            .iter()
            .filter(move |movement| movement.account_id == account_id)
    }

    /// Transfers where `account_id` is either the source or the destination.
    pub fn transfers_for(&self, account_id: AccountId) -> impl Iterator<Item = &Transfer> {
        self.transfers
            .iter()
            .filter(move |transfer| transfer.touches(account_id))
    }

    /// Display name for an account, or "Unknown Account" if it is gone.
    pub fn account_name(&self, id: AccountId) -> &str {
        self.account(id)
            .map(|account| account.name.as_str())
            .unwrap_or("Unknown Account")
    }

    /// Movements whose account no longer exists.
    pub fn dangling_movements(&self) -> impl Iterator<Item = &Movement> {
        self.movements
            .iter()
            .filter(|movement| self.account(movement.account_id).is_none())
    }
}
