//! Plain-text rendering of store snapshots and fetch results.
//!
//! Every function returns the lines to print, so views can be tested
//! without a terminal.

use crate::brokers::{Broker, BrokerDetails};
use crate::fetch::FetchState;
use crate::forms::FormErrors;
use crate::store::{AccountDetails, BankState, Movement, StoreError, Transfer};

use super::format::{format_amount, format_date, format_movement_line, format_transfer_amount};
use super::pane::PaneState;

pub fn account_list(state: &BankState) -> Vec<String> {
    if state.accounts.is_empty() {
        return vec!["No accounts.".to_string()];
    }
    state
        .accounts
        .iter()
        .map(|account| {
            format!(
                "#{}  {} ({})  {}  [{}]",
                account.id,
                account.name,
                account.kind,
                format_amount(account.balance, &account.currency),
                account.account_number
            )
        })
        .collect()
}

/// The account details card, or "Account not found".
pub fn account_details(details: &Result<AccountDetails, StoreError>) -> Vec<String> {
    let Ok(AccountDetails { account, movements }) = details else {
        return vec!["Account not found".to_string()];
    };

    let mut lines = vec![
        account.name.clone(),
        format!("Balance: {}", format_amount(account.balance, &account.currency)),
        format!("Account Number: {}", account.account_number),
        "Recent Transactions".to_string(),
    ];
    for movement in movements {
        lines.extend(movement_row(movement, &account.currency));
    }
    lines
}

fn movement_row(movement: &Movement, currency: &str) -> [String; 2] {
    [
        movement.description.clone(),
        format!(
            "Amount: {} | Date: {}",
            format_amount(movement.amount, currency),
            format_date(movement.date)
        ),
    ]
}

/// Movements pane for the selected account. Amounts are shown in euros
/// whatever the account currency, as on the movements page.
pub fn movements(state: &BankState, pane: &PaneState) -> Vec<String> {
    let Some(id) = pane.selected else {
        return vec!["Select an account to see its movements.".to_string()];
    };
    let rows: Vec<&Movement> = state.movements_for(id).collect();
    if rows.is_empty() {
        return vec!["No movements found for this account.".to_string()];
    }

    let mut lines: Vec<String> = pane
        .visible(&rows)
        .iter()
        .flat_map(|movement| {
            [
                movement.description.clone(),
                format_movement_line(movement.amount, movement.date),
            ]
        })
        .collect();
    if pane.has_more(rows.len()) {
        lines.push(format!("[{}]", pane.toggle_label()));
    }
    lines
}

/// Transfers pane for the selected account.
pub fn transfers(state: &BankState, pane: &PaneState) -> Vec<String> {
    let Some(id) = pane.selected else {
        return vec!["Select an account to see its transactions.".to_string()];
    };
    let rows: Vec<&Transfer> = state.transfers_for(id).collect();
    if rows.is_empty() {
        return vec!["No transactions found for this account.".to_string()];
    }

    let mut lines: Vec<String> = pane
        .visible(&rows)
        .iter()
        .flat_map(|transfer| {
            [
                format_transfer_amount(transfer.amount),
                format!(
                    "From: {}, To: {}",
                    state.account_name(transfer.from_account_id),
                    state.account_name(transfer.to_account_id)
                ),
            ]
        })
        .collect();
    if pane.has_more(rows.len()) {
        lines.push(format!("[{}]", pane.toggle_label()));
    }
    lines
}

pub fn deposit_list(state: &BankState) -> Vec<String> {
    if state.deposits.is_empty() {
        return vec!["No deposits.".to_string()];
    }
    state
        .deposits
        .iter()
        .map(|deposit| {
            format!(
                "#{}  {}  {}  {}%  {}  matures {}",
                deposit.id,
                deposit.description,
                deposit.amount.normalize(),
                deposit.interest_rate.normalize(),
                deposit.duration,
                format_date(deposit.maturity_date)
            )
        })
        .collect()
}

/// Spinner / error / data rendering for a remote read.
pub fn fetched<T>(state: &FetchState<T>, render: impl FnOnce(&T) -> Vec<String>) -> Vec<String> {
    match state {
        FetchState::Loading => vec!["Loading...".to_string()],
        FetchState::Failed(message) => vec![format!("Error: {}", message)],
        FetchState::Loaded(data) => render(data),
    }
}

pub fn broker_list(brokers: &[Broker]) -> Vec<String> {
    let mut lines = vec!["Broker List".to_string()];
    lines.extend(
        brokers
            .iter()
            .map(|broker| format!("{}  {} ({})", broker.id, broker.name, broker.country)),
    );
    lines
}

pub fn broker_details(details: &BrokerDetails) -> Vec<String> {
    vec![
        "Broker Details".to_string(),
        format!("Name: {}", details.name),
        format!("Country: {}", details.country),
        format!("Address: {}", details.address),
        format!("Phone: {}", details.phone),
        format!(
            "Email: {}",
            details.mailto().unwrap_or_else(|| "-".to_string())
        ),
        format!("License: {}", details.license),
        format!("Active Since: {}", details.active_since),
        format!("Website: {}", details.website),
    ]
}

/// Inline validation messages, one per line.
pub fn form_errors<F: Ord + Copy>(errors: &FormErrors<F>) -> Vec<String> {
    errors
        .iter()
        .map(|(_, message)| format!("  ! {}", message))
        .collect()
}
