//! tally - command-line personal expense tracker
//!
//! This library provides the core functionality for the tally expense
//! tracker. It keeps a single ordered collection of expenses in a plain
//! JSON file and answers how much was spent, on what, and when.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Store path resolution
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money)
//! - `storage`: JSON file storage layer
//! - `services`: The ledger holding the expense collection
//! - `reports`: Totals, groupings, and filters over the collection
//! - `audit`: Append-only mutation log
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use tally::services::Ledger;
//! use tally::storage::ExpenseRepository;
//!
//! # fn main() -> tally::error::TallyResult<()> {
//! let repository = ExpenseRepository::new("expenses.json".into());
//! let ledger = Ledger::open(repository, None)?;
//! println!("{} expenses", ledger.len());
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TallyError, TallyResult};
