//! Core data models for tally
//!
//! This module contains the data structures that represent the expense
//! domain: monetary amounts and spending records.

pub mod expense;
pub mod money;

pub use expense::{parse_date, Expense, ExpenseUpdate, UNCATEGORIZED};
pub use money::Money;
