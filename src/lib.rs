//! `bankdesk`: a personal-banking demo over an observable in-memory store.
//!
//! - [`store`]: accounts, movements, deposits and transfers, with
//!   subscribe/command operations
//! - [`fetch`]: three-state remote reader used for the broker directory
//! - [`forms`] and [`ui`]: validation and view-models for the views
//! - [`app`] and [`shell`]: command dispatch for the binary

pub mod app;
pub mod brokers;
pub mod config;
pub mod fetch;
pub mod forms;
pub mod logging;
pub mod mvi;
pub mod shell;
pub mod store;
pub mod ui;
