use rust_decimal::Decimal;
use thiserror::Error;

use super::model::AccountId;

/// Errors returned by store commands and lookups.
///
/// The state is never modified when one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("Account {id} not found")]
    AccountNotFound { id: AccountId },

    #[error("Cannot transfer from account {id} to itself")]
    SameAccount { id: AccountId },

    #[error("Transfer amount must be positive, got {amount}")]
    NonPositiveAmount { amount: Decimal },

    #[error("Insufficient funds in account {account_id}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account_id: AccountId,
        balance: Decimal,
        requested: Decimal,
    },

    #[error("Balance of account {account_id} cannot hold another {amount}")]
    BalanceOverflow { account_id: AccountId, amount: Decimal },

    /// Every id for this kind of entity has been handed out.
    #[error("No {entity} ids left")]
    IdsExhausted { entity: &'static str },
}

impl StoreError {
    /// Whether this is a referential "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::AccountNotFound { .. })
    }
}
