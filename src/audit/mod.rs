//! Audit logging system for tally
//!
//! Records add, update, delete operations with before/after values in an
//! append-only log file kept beside the expense file. Each line is one
//! JSON object (JSONL), so the log survives partial writes to later lines.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
