//! The observable account store.
//!
//! Holds the current [`BankState`] snapshot behind a read-write lock.
//! Readers clone an `Arc` to the snapshot; writers build the next
//! snapshot with [`StoreReducer`] and swap it in whole, so no reader or
//! subscriber can ever observe a half-applied command.

use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex, RwLock};
use rust_decimal::Decimal;

use crate::mvi::Reducer;

use super::error::StoreError;
use super::ids::IdSequence;
use super::intent::StoreIntent;
use super::model::{
    account_number_for, Account, AccountDetails, AccountId, Deposit, DepositId, Movement,
    NewAccount, NewDeposit, NewTransfer, Transfer,
};
use super::reducer::StoreReducer;
use super::state::BankState;

type Callback = Arc<dyn Fn(&Arc<BankState>) + Send + Sync>;

struct Subscriber {
    id: u64,
    callback: Callback,
}

type SubscriberList = Arc<Mutex<Vec<Subscriber>>>;

/// Cheaply cloneable handle to one store. All clones share state and
/// subscribers.
#[derive(Clone)]
pub struct AccountStore {
    core: Arc<RwLock<StoreCore>>,
    subscribers: SubscriberList,
    next_subscriber: Arc<AtomicU64>,
    /// Version of the newest snapshot handed to subscribers.
    delivered: Arc<ReentrantMutex<Cell<u64>>>,
}

struct StoreCore {
    snapshot: Arc<BankState>,
    version: u64,
    account_ids: IdSequence,
    deposit_ids: IdSequence,
    transfer_ids: IdSequence,
}

/// A snapshot just committed, tagged with its position in commit order.
struct Committed {
    snapshot: Arc<BankState>,
    version: u64,
}

impl StoreCore {
    fn apply(&mut self, intent: StoreIntent) -> Committed {
        tracing::debug!(intent = intent.label(), "Applying store intent");
        let next = StoreReducer::reduce(BankState::clone(&self.snapshot), intent);
        self.snapshot = Arc::new(next);
        self.version += 1;
        Committed {
            snapshot: Arc::clone(&self.snapshot),
            version: self.version,
        }
    }
}

fn next_id(ids: &mut IdSequence, entity: &'static str) -> Result<u64, StoreError> {
    ids.next_id().ok_or(StoreError::IdsExhausted { entity })
}

/// Registration returned by [`AccountStore::subscribe`].
///
/// The callback stays registered until [`Subscription::unsubscribe`] is
/// called or the guard is dropped.
#[must_use = "dropping a Subscription unsubscribes the callback"]
pub struct Subscription {
    id: u64,
    subscribers: Weak<Mutex<Vec<Subscriber>>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.lock().retain(|s| s.id != self.id);
        }
    }
}

impl AccountStore {
    /// Create a store seeded with `initial`. Id counters start after the
    /// largest id already present for each entity kind.
    pub fn new(initial: BankState) -> Self {
        let core = StoreCore {
            account_ids: IdSequence::starting_after(initial.accounts.iter().map(|a| a.id)),
            deposit_ids: IdSequence::starting_after(initial.deposits.iter().map(|d| d.id)),
            transfer_ids: IdSequence::starting_after(initial.transfers.iter().map(|t| t.id)),
            snapshot: Arc::new(initial),
            version: 0,
        };

        Self {
            core: Arc::new(RwLock::new(core)),
            subscribers: Arc::new(Mutex::new(Vec::new())),
            next_subscriber: Arc::new(AtomicU64::new(0)),
            delivered: Arc::new(ReentrantMutex::new(Cell::new(0))),
        }
    }

    /// The current snapshot. Shared by reference and never mutated.
    pub fn snapshot(&self) -> Arc<BankState> {
        Arc::clone(&self.core.read().snapshot)
    }

    /// Register `callback` to receive every new snapshot.
    ///
    /// Callbacks run synchronously on the mutating thread, after the
    /// state lock has been released, in registration order. Snapshots
    /// arrive in commit order: when writers race, a snapshot that has
    /// already been overtaken by a newer one is not delivered.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Arc<BankState>) + Send + Sync + 'static,
    {
        let id = self.next_subscriber.fetch_add(1, Ordering::Relaxed);
        self.subscribers.lock().push(Subscriber {
            id,
            callback: Arc::new(callback),
        });

        Subscription {
            id,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    // -- Commands ---------------------------------------------------------

    /// Append a new account with a store-assigned id and a zero balance.
    pub fn add_account(&self, new: NewAccount) -> Result<Account, StoreError> {
        let (account, committed) = {
            let mut core = self.core.write();
            let id = next_id(&mut core.account_ids, "account")?;
            let account = Account {
                id,
                name: new.name,
                kind: new.kind,
                currency: new.currency,
                balance: Decimal::ZERO,
                account_number: account_number_for(id),
            };
            let committed = core.apply(StoreIntent::AddAccount {
                account: account.clone(),
            });
            (account, committed)
        };

        tracing::info!(account_id = account.id, name = %account.name, "Account added");
        self.notify(committed);
        Ok(account)
    }

    /// Remove the account with `id`.
    ///
    /// Returns `None` without notifying anyone when no such account
    /// exists, so deleting twice is a no-op. Movements of the deleted
    /// account are kept.
    pub fn delete_account(&self, id: AccountId) -> Option<Account> {
        let (removed, committed) = {
            let mut core = self.core.write();
            let removed = core.snapshot.account(id).cloned();
            let Some(removed) = removed else {
                tracing::debug!(account_id = id, "Delete of unknown account ignored");
                return None;
            };
            let committed = core.apply(StoreIntent::DeleteAccount { id });
            (removed, committed)
        };

        let dangling = committed.snapshot.movements_for(id).count();
        if dangling > 0 {
            tracing::warn!(
                account_id = id,
                movements = dangling,
                "Deleted account still has movements referencing it"
            );
        }
        tracing::info!(account_id = id, "Account deleted");
        self.notify(committed);
        Some(removed)
    }

    /// Append a new deposit with a store-assigned id.
    pub fn add_deposit(&self, new: NewDeposit) -> Result<Deposit, StoreError> {
        let (deposit, committed) = {
            let mut core = self.core.write();
            let deposit = Deposit {
                id: next_id(&mut core.deposit_ids, "deposit")?,
                description: new.description,
                amount: new.amount,
                interest_rate: new.interest_rate,
                duration: new.duration,
                maturity_date: new.maturity_date,
            };
            let committed = core.apply(StoreIntent::AddDeposit {
                deposit: deposit.clone(),
            });
            (deposit, committed)
        };

        tracing::info!(deposit_id = deposit.id, amount = %deposit.amount, "Deposit added");
        self.notify(committed);
        Ok(deposit)
    }

    /// Remove the deposit with `id`; `None` if there is none.
    pub fn delete_deposit(&self, id: DepositId) -> Option<Deposit> {
        let (removed, committed) = {
            let mut core = self.core.write();
            let removed = core.snapshot.deposits.iter().find(|d| d.id == id).cloned();
            let Some(removed) = removed else {
                tracing::debug!(deposit_id = id, "Delete of unknown deposit ignored");
                return None;
            };
            let committed = core.apply(StoreIntent::DeleteDeposit { id });
            (removed, committed)
        };

        tracing::info!(deposit_id = id, "Deposit deleted");
        self.notify(committed);
        Some(removed)
    }

    /// Record a transfer and move the money in one state transition.
    ///
    /// The checks run under the write lock against the current balances.
    pub fn add_transfer(&self, new: NewTransfer) -> Result<Transfer, StoreError> {
        let (transfer, committed) = {
            let mut core = self.core.write();
            check_transfer(&core.snapshot, &new)?;

            let transfer = Transfer {
                id: next_id(&mut core.transfer_ids, "transfer")?,
                from_account_id: new.from_account_id,
                to_account_id: new.to_account_id,
                amount: new.amount,
            };
            let committed = core.apply(StoreIntent::ExecuteTransfer {
                transfer: transfer.clone(),
            });
            (transfer, committed)
        };

        tracing::info!(
            transfer_id = transfer.id,
            from = transfer.from_account_id,
            to = transfer.to_account_id,
            amount = %transfer.amount,
            "Transfer executed"
        );
        self.notify(committed);
        Ok(transfer)
    }

    // -- Queries ----------------------------------------------------------

    pub fn account(&self, id: AccountId) -> Option<Account> {
        self.snapshot().account(id).cloned()
    }

    /// The account with `id` and its movements in posting order.
    pub fn account_details(&self, id: AccountId) -> Result<AccountDetails, StoreError> {
        let snapshot = self.snapshot();
        let account = snapshot
            .account(id)
            .cloned()
            .ok_or(StoreError::AccountNotFound { id })?;
        let movements = snapshot.movements_for(id).cloned().collect();
        Ok(AccountDetails { account, movements })
    }

    /// Movements of an existing account, in posting order.
    pub fn movements_for(&self, id: AccountId) -> Result<Vec<Movement>, StoreError> {
        self.account_details(id).map(|details| details.movements)
    }

    /// Transfers where `id` is the source or the destination.
    pub fn transfers_for(&self, id: AccountId) -> Vec<Transfer> {
        self.snapshot().transfers_for(id).cloned().collect()
    }

    pub fn account_name(&self, id: AccountId) -> String {
        self.snapshot().account_name(id).to_string()
    }

    /// Deliver `committed` unless a newer snapshot already went out.
    ///
    /// The delivery lock is re-entrant so a callback may itself mutate
    /// the store; the nested snapshot is newer, and the outer delivery
    /// stops before handing the older one to the remaining subscribers.
    fn notify(&self, committed: Committed) {
        let delivered = self.delivered.lock();
        if delivered.get() >= committed.version {
            tracing::debug!(version = committed.version, "Skipping overtaken snapshot");
            return;
        }
        delivered.set(committed.version);

        let callbacks: Vec<Callback> = self
            .subscribers
            .lock()
            .iter()
            .map(|s| Arc::clone(&s.callback))
            .collect();

        for callback in callbacks {
            if delivered.get() > committed.version {
                break;
            }
            callback(&committed.snapshot);
        }
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new(BankState::default())
    }
}

fn check_transfer(state: &BankState, new: &NewTransfer) -> Result<(), StoreError> {
    if new.amount <= Decimal::ZERO {
        return Err(StoreError::NonPositiveAmount { amount: new.amount });
    }

    let from = state
        .account(new.from_account_id)
        .ok_or(StoreError::AccountNotFound {
            id: new.from_account_id,
        })?;
    let to = state
        .account(new.to_account_id)
        .ok_or(StoreError::AccountNotFound {
            id: new.to_account_id,
        })?;

    if from.id == to.id {
        return Err(StoreError::SameAccount { id: from.id });
    }

    if new.amount > from.balance {
        return Err(StoreError::InsufficientFunds {
            account_id: from.id,
            balance: from.balance,
            requested: new.amount,
        });
    }

    if to.balance.checked_add(new.amount).is_none() {
        return Err(StoreError::BalanceOverflow {
            account_id: to.id,
            amount: new.amount,
        });
    }

    Ok(())
}
