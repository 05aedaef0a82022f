//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use bankdesk::config::ApiConfig;
use bankdesk::fetch::HttpClient;
use bankdesk::store::{parse_seed, AccountStore, BankState};

/// The two accounts and two movements used across the account tests.
pub const SCENARIO_SEED: &str = r#"{
    "accounts": [
        { "id": 1, "name": "Checking Account", "balance": 1000, "accountNumber": "1234567890", "type": "Checking", "currency": "EUR" },
        { "id": 2, "name": "Savings Account", "balance": 5000, "accountNumber": "0987654321", "type": "Savings", "currency": "USD" }
    ],
    "movements": [
        { "id": 1, "accountId": 1, "description": "Grocery Shopping", "amount": -50, "date": "2023-01-01" },
        { "id": 2, "accountId": 1, "description": "Salary", "amount": 1500, "date": "2023-01-15" }
    ]
}"#;

pub fn scenario_state() -> BankState {
    parse_seed(SCENARIO_SEED).expect("scenario seed parses")
}

pub fn scenario_store() -> AccountStore {
    AccountStore::new(scenario_state())
}

/// HTTP client with short timeouts for talking to the mock API.
pub fn test_client() -> HttpClient {
    HttpClient::new(&ApiConfig {
        base_url: "http://127.0.0.1".to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    })
    .expect("client builds")
}
