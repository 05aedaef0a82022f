//! Form validation for the account, deposit and transfer dialogs.
//!
//! Each form turns raw user input into the matching store command input,
//! or into per-field error messages shown inline next to the input.

mod account;
mod deposit;
mod errors;
mod transfer;

pub use account::{AccountField, AccountForm};
pub use deposit::{DepositField, DepositForm};
pub use errors::FormErrors;
pub use transfer::{TransferField, TransferForm};
