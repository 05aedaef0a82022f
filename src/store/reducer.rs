//! Pure state transitions for the account store.

use crate::mvi::Reducer;

use super::intent::StoreIntent;
use super::state::BankState;

/// Reducer for [`BankState`].
///
/// Total over its input: an intent that references a missing entity
/// leaves the state unchanged. The store checks references before it
/// dispatches, so callers see a "not found" error instead of a silent
/// no-op.
pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = BankState;
    type Intent = StoreIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoreIntent::AddAccount { account } => {
                state.accounts.push(account);
                state
            }
            StoreIntent::DeleteAccount { id } => {
                state.accounts.retain(|account| account.id != id);
                state
            }
            StoreIntent::AddDeposit { deposit } => {
                state.deposits.push(deposit);
                state
            }
            StoreIntent::DeleteDeposit { id } => {
                state.deposits.retain(|deposit| deposit.id != id);
                state
            }
            StoreIntent::ExecuteTransfer { transfer } => {
                let from = state
                    .accounts
                    .iter()
                    .position(|a| a.id == transfer.from_account_id);
                let to = state
                    .accounts
                    .iter()
                    .position(|a| a.id == transfer.to_account_id);

                let (Some(from), Some(to)) = (from, to) else {
                    return state;
                };
                let debited = state.accounts[from].balance.checked_sub(transfer.amount);
                let credited = state.accounts[to].balance.checked_add(transfer.amount);
                let (Some(debited), Some(credited)) = (debited, credited) else {
                    return state;
                };

                state.accounts[from].balance = debited;
                state.accounts[to].balance = credited;
                state.transfers.push(transfer);
                state
            }
        }
    }
}
