use std::str::FromStr;

use rust_decimal::Decimal;

use crate::store::{AccountId, BankState, NewTransfer};

use super::errors::{filled, FormErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TransferField {
    From,
    To,
    Amount,
}

/// Input of the transfer form. Accounts are picked from a list, the
/// amount is free text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferForm {
    pub from: Option<AccountId>,
    pub to: Option<AccountId>,
    pub amount: String,
}

impl TransferForm {
    /// Validate against the balances in `state`.
    ///
    /// This is a pre-submit check; the store repeats the balance check
    /// when the transfer is executed.
    pub fn validate(&self, state: &BankState) -> Result<NewTransfer, FormErrors<TransferField>> {
        let mut errors = FormErrors::new();

        let from = match self.from {
            None => {
                errors.insert(TransferField::From, "Please select a source account.");
                None
            }
            Some(id) => {
                let account = state.account(id);
                if account.is_none() {
                    errors.insert(TransferField::From, "Selected source account no longer exists.");
                }
                account
            }
        };

        match self.to {
            None => errors.insert(TransferField::To, "Please select a destination account."),
            Some(id) if state.account(id).is_none() => {
                errors.insert(TransferField::To, "Selected destination account no longer exists.")
            }
            Some(id) if Some(id) == self.from => {
                errors.insert(TransferField::To, "Source and destination accounts must differ.")
            }
            Some(_) => {}
        }

        let amount = match filled(&self.amount) {
            None => {
                errors.insert(TransferField::Amount, "Please enter an amount.");
                None
            }
            Some(raw) => match Decimal::from_str(raw) {
                Ok(amount) if amount > Decimal::ZERO => {
                    if from.is_some_and(|account| amount > account.balance) {
                        errors.insert(
                            TransferField::Amount,
                            "Insufficient funds in the source account.",
                        );
                    }
                    Some(amount)
                }
                _ => {
                    errors.insert(TransferField::Amount, "Please enter a valid amount.");
                    None
                }
            },
        };

        errors.into_result(|| NewTransfer {
            from_account_id: self.from.unwrap_or_default(),
            to_account_id: self.to.unwrap_or_default(),
            amount: amount.unwrap_or_default(),
        })
    }
}
