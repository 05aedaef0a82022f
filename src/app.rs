//! Application wiring: one store, the broker fetchers and the view state,
//! driven by [`Command`]s.

use clap::Subcommand;
use thiserror::Error;

use crate::brokers::{Broker, BrokerApi, BrokerId, DetailsPayload};
use crate::config::{Config, ConfigError};
use crate::fetch::{FetchError, FetchState, Fetcher, HttpClient};
use crate::forms::{AccountForm, DepositForm, TransferForm};
use crate::mvi::Reducer;
use crate::store::{
    demo_state, load_seed, AccountId, AccountStore, BankState, DepositId, SeedError,
};
use crate::ui::pane::{PaneIntent, PaneReducer, PaneState};
use crate::ui::render;

/// Errors that prevent the application from starting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Everything a user can ask for, from the command line or the shell.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// List all accounts
    Accounts,
    /// Show an account and its movements
    Account { id: AccountId },
    /// Show the movements of an account
    Movements {
        id: AccountId,
        /// Show every movement instead of the first few
        #[arg(long)]
        all: bool,
    },
    /// Show the transfers touching an account
    Transfers {
        id: AccountId,
        /// Show every transfer instead of the first few
        #[arg(long)]
        all: bool,
    },
    /// Toggle "Show More" on the last movements/transfers list
    More,
    /// List all deposits
    Deposits,
    /// Fetch the broker directory
    Brokers,
    /// Fetch the details of one broker
    Broker { id: String },
    /// Add an account
    AddAccount {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long = "type", default_value = "")]
        kind: String,
        #[arg(long, default_value = "")]
        currency: String,
    },
    /// Delete an account
    DeleteAccount { id: AccountId },
    /// Add a deposit
    AddDeposit {
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        amount: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        interest_rate: String,
        #[arg(long, default_value = "")]
        duration: String,
        /// YYYY-MM-DD
        #[arg(long, default_value = "")]
        maturity_date: String,
    },
    /// Delete a deposit
    DeleteDeposit { id: DepositId },
    /// Transfer money between two accounts
    Transfer {
        #[arg(long)]
        from: Option<AccountId>,
        #[arg(long)]
        to: Option<AccountId>,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        amount: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActivePane {
    Movements,
    Transfers,
}

pub struct App {
    store: AccountStore,
    api: BrokerApi,
    brokers: Fetcher<Vec<Broker>>,
    broker_details: Fetcher<DetailsPayload>,
    movements: PaneState,
    transfers: PaneState,
    active_pane: Option<ActivePane>,
}

impl App {
    /// Build the store from the configured seed (or the demo data) and
    /// the HTTP client from the API settings.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let initial = match &config.seed.path {
            Some(path) => load_seed(path)?,
            None => demo_state(),
        };
        tracing::info!(
            accounts = initial.accounts.len(),
            movements = initial.movements.len(),
            deposits = initial.deposits.len(),
            "Store seeded"
        );

        let client = HttpClient::new(&config.api)?;
        let api = BrokerApi::new(&config.api.base_url)?;
        let preview_len = config.display.preview_len;

        Ok(Self {
            store: AccountStore::new(initial),
            api,
            brokers: Fetcher::new(client.clone()),
            broker_details: Fetcher::new(client),
            movements: PaneState::with_preview_len(preview_len),
            transfers: PaneState::with_preview_len(preview_len),
            active_pane: None,
        })
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    /// Run one command and return the lines to show.
    pub async fn execute(&mut self, command: Command) -> Vec<String> {
        match command {
            Command::Accounts => render::account_list(&self.store.snapshot()),

            Command::Account { id } => render::account_details(&self.store.account_details(id)),

            Command::Movements { id, all } => {
                self.movements = select(self.movements.clone(), id, all);
                self.active_pane = Some(ActivePane::Movements);
                render::movements(&self.store.snapshot(), &self.movements)
            }

            Command::Transfers { id, all } => {
                self.transfers = select(self.transfers.clone(), id, all);
                self.active_pane = Some(ActivePane::Transfers);
                render::transfers(&self.store.snapshot(), &self.transfers)
            }

            Command::More => match self.active_pane {
                Some(ActivePane::Movements) => {
                    self.movements =
                        PaneReducer::reduce(self.movements.clone(), PaneIntent::ToggleShowMore);
                    render::movements(&self.store.snapshot(), &self.movements)
                }
                Some(ActivePane::Transfers) => {
                    self.transfers =
                        PaneReducer::reduce(self.transfers.clone(), PaneIntent::ToggleShowMore);
                    render::transfers(&self.store.snapshot(), &self.transfers)
                }
                None => vec!["Nothing to expand; list movements or transfers first.".to_string()],
            },

            Command::Deposits => render::deposit_list(&self.store.snapshot()),

            Command::Brokers => {
                self.brokers.load(self.api.brokers_url());
                let state = self.brokers.settled().await;
                render::fetched(&state, |brokers| render::broker_list(brokers))
            }

            Command::Broker { id } => {
                let id = BrokerId::from(id.as_str());
                self.broker_details.load(self.api.details_url(&id));
                let state = match self.broker_details.settled().await {
                    FetchState::Loaded(payload) => match payload.into_details() {
                        Some(details) => FetchState::Loaded(details),
                        None => FetchState::Failed(format!("Broker {} not found", id)),
                    },
                    FetchState::Failed(message) => FetchState::Failed(message),
                    FetchState::Loading => FetchState::Loading,
                };
                render::fetched(&state, render::broker_details)
            }

            Command::AddAccount {
                name,
                kind,
                currency,
            } => {
                let form = AccountForm {
                    name,
                    kind,
                    currency,
                };
                match form.validate() {
                    Ok(new) => match self.store.add_account(new) {
                        Ok(account) => vec![format!("Account added successfully (#{})", account.id)],
                        Err(e) => vec![format!("Failed to add account: {}", e)],
                    },
                    Err(errors) => rejected(render::form_errors(&errors)),
                }
            }

            Command::DeleteAccount { id } => match self.store.delete_account(id) {
                Some(account) => {
                    for pane in [&mut self.movements, &mut self.transfers] {
                        *pane = PaneReducer::reduce(pane.clone(), PaneIntent::AccountRemoved { id });
                    }
                    vec![format!("Account deleted successfully ({})", account.name)]
                }
                None => vec!["Account not found".to_string()],
            },

            Command::AddDeposit {
                description,
                amount,
                interest_rate,
                duration,
                maturity_date,
            } => {
                let form = DepositForm {
                    description,
                    amount,
                    interest_rate,
                    duration,
                    maturity_date,
                };
                match form.validate() {
                    Ok(new) => match self.store.add_deposit(new) {
                        Ok(deposit) => vec![format!("Deposit added successfully! (#{})", deposit.id)],
                        Err(e) => vec![format!("Failed to add deposit: {}", e)],
                    },
                    Err(errors) => rejected(render::form_errors(&errors)),
                }
            }

            Command::DeleteDeposit { id } => match self.store.delete_deposit(id) {
                Some(_) => vec!["Deposit deleted successfully!".to_string()],
                None => vec!["Deposit not found".to_string()],
            },

            Command::Transfer { from, to, amount } => {
                let form = TransferForm { from, to, amount };
                let new = match form.validate(&self.store.snapshot()) {
                    Ok(new) => new,
                    Err(errors) => return rejected(render::form_errors(&errors)),
                };
                match self.store.add_transfer(new) {
                    Ok(_) => vec!["Transfer successful!".to_string()],
                    Err(e) => vec![format!("Transfer failed: {}", e)],
                }
            }
        }
    }
}

fn select(pane: PaneState, id: AccountId, all: bool) -> PaneState {
    let mut intents = vec![PaneIntent::AccountSelected { id }];
    if all {
        intents.push(PaneIntent::ToggleShowMore);
    }
    PaneReducer::reduce_all(pane, intents)
}

fn rejected(mut messages: Vec<String>) -> Vec<String> {
    messages.insert(0, "Please fix the errors in the form.".to_string());
    messages
}

/// One-line summary pushed to the shell after every store change.
pub fn change_summary(snapshot: &BankState) -> String {
    format!(
        "* store updated: {} accounts, {} deposits, {} transfers",
        snapshot.accounts.len(),
        snapshot.deposits.len(),
        snapshot.transfers.len()
    )
}
