//! Atomic JSON file I/O
//!
//! All reads and writes of the expense file go through these two functions,
//! so the durability rules live in one place: a write either replaces the
//! file completely or leaves the previous contents intact.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::TallyError;

/// Read a JSON value from a file
///
/// A missing file yields the default value. A file that exists but cannot
/// be opened or parsed is a corrupt store.
pub fn read_json<T, P>(path: P) -> Result<T, TallyError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| TallyError::corrupt_store(path, format!("failed to open: {}", e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| TallyError::corrupt_store(path, e.to_string()))
}

/// Write a JSON value to a file atomically
///
/// Writes to a temp file in the same directory, syncs it, then renames it
/// over the target. An interrupted write leaves the old file in place.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TallyError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TallyError::Persistence(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must share the target's directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| TallyError::Persistence(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| TallyError::Persistence(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| TallyError::Persistence(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TallyError::Persistence(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TallyError::Persistence(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use tempfile::TempDir;

    fn sample_records() -> Vec<Expense> {
        vec![
            Expense::build("50.00", "2024-01-15", "lunch", "Food").unwrap(),
            Expense::build("20.00", "2024-02-01", "book", "Education").unwrap(),
        ]
    }

    #[test]
    fn test_read_missing_file_yields_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let records: Vec<Expense> = read_json(&path).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        let records = sample_records();
        write_json_atomic(&path, &records).unwrap();
        assert!(path.exists());

        let loaded: Vec<Expense> = read_json(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].note, "lunch");
        assert_eq!(loaded[1].amount, records[1].amount);
    }

    #[test]
    fn test_read_malformed_is_corrupt_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<Vec<Expense>, _>(&path).unwrap_err();
        assert!(err.is_corrupt_store());
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        write_json_atomic(&path, &sample_records()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("expenses.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("expenses.json");

        write_json_atomic(&path, &sample_records()).unwrap();
        assert!(path.exists());
    }
}
