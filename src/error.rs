//! Error types for tally
//!
//! One thiserror enum covers every failure the tool can surface, split
//! between validation failures (bad input, no state change) and storage
//! failures (corrupt or unwritable expense file).

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// Amount failed validation (not a positive decimal number)
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Date failed validation (not a real YYYY-MM-DD date)
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Index does not refer to an existing expense
    #[error("No expense at index {index} (there are {count} expenses)")]
    IndexOutOfRange { index: usize, count: usize },

    /// The expense file exists but cannot be read as valid expense data
    #[error("Expense file {} is corrupt: {detail}", .path.display())]
    CorruptStore { path: PathBuf, detail: String },

    /// Writing the expense file failed
    #[error("Failed to save expenses: {0}")]
    Persistence(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl TallyError {
    /// Create a corrupt-store error for the given file
    pub fn corrupt_store(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        Self::CorruptStore {
            path: path.into(),
            detail: detail.into(),
        }
    }

    /// Check if this is a validation error (amount or date)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidAmount(_) | Self::InvalidDate(_))
    }

    /// Check if this is an index error
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if this is a corrupt-store error
    pub fn is_corrupt_store(&self) -> bool {
        matches!(self, Self::CorruptStore { .. })
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for tally operations
pub type TallyResult<T> = Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TallyError::InvalidAmount("abc".into());
        assert_eq!(err.to_string(), "Invalid amount: abc");
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = TallyError::IndexOutOfRange { index: 5, count: 2 };
        assert_eq!(
            err.to_string(),
            "No expense at index 5 (there are 2 expenses)"
        );
        assert!(err.is_index_out_of_range());
    }

    #[test]
    fn test_corrupt_store_error() {
        let err = TallyError::corrupt_store("/tmp/expenses.json", "not a JSON array");
        assert_eq!(
            err.to_string(),
            "Expense file /tmp/expenses.json is corrupt: not a JSON array"
        );
        assert!(err.is_corrupt_store());
    }

    #[test]
    fn test_validation_predicate() {
        assert!(TallyError::InvalidAmount("0".into()).is_validation());
        assert!(TallyError::InvalidDate("2024-13-01".into()).is_validation());
        assert!(!TallyError::Persistence("disk full".into()).is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tally_err: TallyError = io_err.into();
        assert!(matches!(tally_err, TallyError::Io(_)));
    }
}
