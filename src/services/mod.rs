//! Service layer for tally
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, indexing, and persistence for every mutation.

pub mod ledger;

pub use ledger::Ledger;
