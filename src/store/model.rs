//! Entities held by the account store.
//!
//! JSON field names follow the camelCase layout used by the seed files
//! (`accountId`, `accountNumber`, `interestRate`, ...).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type AccountId = u64;
pub type MovementId = u64;
pub type DepositId = u64;
pub type TransferId = u64;

/// A bank account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    /// Account type as shown to the user ("Checking", "Savings", ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub currency: String,
    /// Only ever changed by executing a transfer.
    pub balance: Decimal,
    pub account_number: String,
}

/// A single posted transaction against one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub id: MovementId,
    pub account_id: AccountId,
    pub description: String,
    /// Signed: negative for debits.
    pub amount: Decimal,
    pub date: NaiveDate,
}

/// A term deposit. Not linked to any account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    pub id: DepositId,
    pub description: String,
    pub amount: Decimal,
    pub interest_rate: Decimal,
    pub duration: String,
    pub maturity_date: NaiveDate,
}

/// A transfer between two accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: TransferId,
    pub from_account_id: AccountId,
    pub to_account_id: AccountId,
    pub amount: Decimal,
}

impl Transfer {
    /// Whether this transfer debits or credits `account_id`.
    pub fn touches(&self, account_id: AccountId) -> bool {
        self.from_account_id == account_id || self.to_account_id == account_id
    }
}

/// Input for [`crate::store::AccountStore::add_account`]. The store assigns
/// the id, the account number and a zero balance.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub name: String,
    pub kind: String,
    pub currency: String,
}

/// Input for [`crate::store::AccountStore::add_deposit`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewDeposit {
    pub description: String,
    pub amount: Decimal,
    pub interest_rate: Decimal,
    pub duration: String,
    pub maturity_date: NaiveDate,
}

/// Input for [`crate::store::AccountStore::add_transfer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewTransfer {
    pub from_account_id: AccountId,
    pub to_account_id: AccountId,
    pub amount: Decimal,
}

/// An account together with its movements, in posting order.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountDetails {
    pub account: Account,
    pub movements: Vec<Movement>,
}

/// Account number handed out to accounts created at runtime.
pub(crate) fn account_number_for(id: AccountId) -> String {
    format!("{:010}", id)
}
