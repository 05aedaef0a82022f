//! Observable in-memory account store.
//!
//! Single source of truth for accounts, movements, deposits and
//! transfers. Commands are reduced into a fresh [`BankState`] snapshot
//! which is swapped in whole and pushed to subscribers.

mod account_store;
mod error;
mod ids;
mod intent;
mod model;
mod reducer;
mod seed;
mod state;

pub use account_store::{AccountStore, Subscription};
pub use error::StoreError;
pub use ids::IdSequence;
pub use intent::StoreIntent;
pub use model::{
    Account, AccountDetails, AccountId, Deposit, DepositId, Movement, MovementId, NewAccount,
    NewDeposit, NewTransfer, Transfer, TransferId,
};
pub use reducer::StoreReducer;
pub use seed::{demo_state, load_seed, parse_seed, SeedError};
pub use state::BankState;
