//! Commands understood by the store reducer.

use crate::mvi::Intent;

use super::model::{Account, AccountId, Deposit, DepositId, Transfer};

/// A single state transition of the account store.
///
/// Ids are assigned by the store before the intent is built, so every
/// intent carries the complete entity.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreIntent {
    AddAccount { account: Account },
    DeleteAccount { id: AccountId },
    AddDeposit { deposit: Deposit },
    DeleteDeposit { id: DepositId },
    /// Append the transfer, debit the source and credit the destination.
    ExecuteTransfer { transfer: Transfer },
}

impl Intent for StoreIntent {}

impl StoreIntent {
    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            StoreIntent::AddAccount { .. } => "add_account",
            StoreIntent::DeleteAccount { .. } => "delete_account",
            StoreIntent::AddDeposit { .. } => "add_deposit",
            StoreIntent::DeleteDeposit { .. } => "delete_deposit",
            StoreIntent::ExecuteTransfer { .. } => "execute_transfer",
        }
    }
}
