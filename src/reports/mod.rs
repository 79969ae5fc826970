//! Reports module for tally
//!
//! Provides aggregation over the expense collection: totals, category and
//! month breakdowns, and index-preserving filters for listings.

pub mod filter;
pub mod summary;

pub use filter::{filter_by_category, filter_by_date};
pub use summary::SummaryReport;
