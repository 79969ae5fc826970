//! Expense repository for JSON storage
//!
//! Manages loading and saving the expense collection. The file holds a
//! plain JSON array of expense records in insertion order.

use std::path::{Path, PathBuf};

use crate::error::TallyError;
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all expenses from disk
    ///
    /// A missing file is an empty collection. An existing file that cannot
    /// be parsed, or that contains a record violating the amount invariant,
    /// is reported as a corrupt store.
    pub fn load(&self) -> Result<Vec<Expense>, TallyError> {
        let expenses: Vec<Expense> = read_json(&self.path)?;

        for (position, expense) in expenses.iter().enumerate() {
            if !expense.amount.is_positive() {
                return Err(TallyError::corrupt_store(
                    &self.path,
                    format!("record {} has a non-positive amount", position + 1),
                ));
            }
        }

        Ok(expenses)
    }

    /// Save the full expense collection to disk, replacing the file contents
    pub fn save(&self, expenses: &[Expense]) -> Result<(), TallyError> {
        write_json_atomic(&self.path, &expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (_temp_dir, repo) = create_test_repo();

        let expenses = vec![
            Expense::build("50.00", "2024-01-15", "lunch", "Food").unwrap(),
            Expense::build("20.00", "2024-02-01", "book", "Education").unwrap(),
        ];

        repo.save(&expenses).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].note, "lunch");
        assert_eq!(loaded[0].amount.cents(), 5000);
        assert_eq!(loaded[1].note, "book");
    }

    #[test]
    fn test_reload_then_save_rewrites_identical_bytes() {
        let (_temp_dir, repo) = create_test_repo();

        let expenses = vec![
            Expense::build("10.50", "2024-01-15", "lunch", "Food").unwrap(),
            Expense::build("10.99", "2024-01-20", "café", "Food").unwrap(),
            Expense::build("0.01", "2024-02-01", "penny", "").unwrap(),
            Expense::build("333.33", "2024-02-10", "rent share", "Housing").unwrap(),
        ];
        repo.save(&expenses).unwrap();
        let first_write = fs::read(repo.path()).unwrap();

        let reloaded = repo.load().unwrap();
        repo.save(&reloaded).unwrap();
        let second_write = fs::read(repo.path()).unwrap();

        assert_eq!(first_write, second_write);
    }

    #[test]
    fn test_load_decimal_amount_file() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            repo.path(),
            r#"[{"amount": 50.0, "date": "2024-01-15", "note": "lunch", "category": "Food"}]"#,
        )
        .unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].amount.cents(), 5000);
        assert_eq!(loaded[0].category, "Food");
    }

    #[test]
    fn test_malformed_file_is_corrupt() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), "{{{ not json").unwrap();

        assert!(repo.load().unwrap_err().is_corrupt_store());
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), r#"{"expenses": []}"#).unwrap();

        assert!(repo.load().unwrap_err().is_corrupt_store());
    }

    #[test]
    fn test_non_positive_amount_is_corrupt() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            repo.path(),
            r#"[{"amount": -5.0, "date": "2024-01-15", "note": "", "category": "Food"}]"#,
        )
        .unwrap();

        let err = repo.load().unwrap_err();
        assert!(err.is_corrupt_store());
        assert!(err.to_string().contains("record 1"));
    }

    #[test]
    fn test_invalid_date_is_corrupt() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            repo.path(),
            r#"[{"amount": 5.0, "date": "not-a-date", "note": "", "category": "Food"}]"#,
        )
        .unwrap();

        assert!(repo.load().unwrap_err().is_corrupt_store());
    }
}
