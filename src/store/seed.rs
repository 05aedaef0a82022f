//! Initial store contents: the built-in demo data or a JSON seed file.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use super::model::{Account, Deposit, Movement, Transfer};
use super::state::BankState;

/// Errors that can occur when loading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate {entity} id {id} in seed data")]
    DuplicateId { entity: &'static str, id: u64 },
}

/// On-disk layout of a seed file. Every list is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SeedFile {
    accounts: Vec<Account>,
    movements: Vec<Movement>,
    deposits: Vec<Deposit>,
    transfers: Vec<Transfer>,
}

/// Load and validate a JSON seed file.
pub fn load_seed(path: &Path) -> Result<BankState, SeedError> {
    let content = fs::read_to_string(path).map_err(|e| SeedError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_seed(&content).map_err(|e| match e {
        SeedError::ParseError { source, .. } => SeedError::ParseError {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Parse seed JSON. Ids must be unique per entity kind.
pub fn parse_seed(content: &str) -> Result<BankState, SeedError> {
    let seed: SeedFile = serde_json::from_str(content).map_err(|e| SeedError::ParseError {
        path: PathBuf::new(),
        source: e,
    })?;

    ensure_unique("account", seed.accounts.iter().map(|a| a.id))?;
    ensure_unique("movement", seed.movements.iter().map(|m| m.id))?;
    ensure_unique("deposit", seed.deposits.iter().map(|d| d.id))?;
    ensure_unique("transfer", seed.transfers.iter().map(|t| t.id))?;

    Ok(BankState {
        accounts: seed.accounts,
        movements: seed.movements,
        deposits: seed.deposits,
        transfers: seed.transfers,
    })
}

fn ensure_unique(entity: &'static str, ids: impl Iterator<Item = u64>) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId { entity, id });
        }
    }
    Ok(())
}

/// Built-in mock data used when no seed file is configured.
pub fn demo_state() -> BankState {
    BankState {
        accounts: vec![
            account(1, "Checking Account", "Checking", "EUR", 1000, "1234567890"),
            account(2, "Savings Account", "Savings", "USD", 5000, "0987654321"),
            account(3, "Holiday Fund", "Savings", "EUR", 1200, "1122334455"),
        ],
        movements: vec![
            movement(1, 1, "Grocery Shopping", -50, (2023, 1, 1)),
            movement(2, 1, "Salary", 1500, (2023, 1, 15)),
            movement(3, 1, "Electricity Bill", -75, (2023, 1, 20)),
            movement(4, 2, "Interest Payment", 12, (2023, 1, 31)),
            movement(5, 1, "Restaurant", -42, (2023, 2, 3)),
            movement(6, 3, "Monthly Saving", 200, (2023, 2, 1)),
        ],
        deposits: vec![
            Deposit {
                id: 1,
                description: "Fixed Term Deposit".to_string(),
                amount: Decimal::from(10_000),
                interest_rate: Decimal::new(25, 1),
                duration: "12 months".to_string(),
                maturity_date: date((2024, 6, 30)),
            },
            Deposit {
                id: 2,
                description: "Flexible Savings".to_string(),
                amount: Decimal::from(2_500),
                interest_rate: Decimal::new(15, 1),
                duration: "6 months".to_string(),
                maturity_date: date((2023, 12, 31)),
            },
        ],
        transfers: vec![Transfer {
            id: 1,
            from_account_id: 1,
            to_account_id: 3,
            amount: Decimal::from(100),
        }],
    }
}

fn account(id: u64, name: &str, kind: &str, currency: &str, balance: i64, number: &str) -> Account {
    Account {
        id,
        name: name.to_string(),
        kind: kind.to_string(),
        currency: currency.to_string(),
        balance: Decimal::from(balance),
        account_number: number.to_string(),
    }
}

fn movement(id: u64, account_id: u64, description: &str, amount: i64, ymd: (i32, u32, u32)) -> Movement {
    Movement {
        id,
        account_id,
        description: description.to_string(),
        amount: Decimal::from(amount),
        date: date(ymd),
    }
}

fn date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
