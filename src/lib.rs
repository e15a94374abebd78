//! budgetbook - monthly budgets with a post-lock todo list
//!
//! This library provides the client side of a personal budgeting system.
//! The budget API owns all durable state; this crate fetches it through a
//! query cache, works out which lifecycle stage every budget is in, and
//! presents the result on the command line.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `lifecycle`: Pure derivation of budget and card lifecycle stages
//! - `models`: Data models shared with the API (accounts, budgets, todo lists)
//! - `api`: The API boundary and its local snapshot implementation
//! - `query`: Query cache with staleness, optimistic updates and rollback
//! - `services`: Business logic combining the API, cache and lifecycle
//! - `display`: Plain-text formatting for terminal output
//! - `cli`: Command handlers for the `budgetbook` binary
//! - `config`: Configuration and path management
//! - `audit`: Activity log of client-side mutations
//! - `storage`: JSON file helpers
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use budgetbook::client::BudgetClient;
//! use budgetbook::config::{BudgetbookPaths, Settings};
//! use budgetbook::services::BudgetService;
//!
//! let paths = BudgetbookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let client = BudgetClient::open_local(&paths, settings)?;
//!
//! for card in BudgetService::new(&client).list_cards()? {
//!     println!("{}: {:?}", card.budget.title(), card.state);
//! }
//! ```

pub mod api;
pub mod audit;
pub mod cli;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod query;
pub mod services;
pub mod storage;

pub use error::{BudgetbookError, BudgetbookResult};
