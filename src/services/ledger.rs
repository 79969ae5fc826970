//! Expense ledger
//!
//! The ledger owns the in-memory expense collection and coordinates every
//! mutation: validate first, then mutate, then persist the whole collection.
//! If persisting fails the in-memory change is rolled back, so memory and
//! disk never disagree after an operation returns.
//!
//! Expenses are addressed by 1-based position, matching the numbering shown
//! in listings. Positions shift when an earlier expense is deleted.

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{TallyError, TallyResult};
use crate::models::{Expense, ExpenseUpdate};
use crate::storage::ExpenseRepository;

/// The expense collection with persistence and audit logging
pub struct Ledger {
    repository: ExpenseRepository,
    audit: Option<AuditLogger>,
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Open the ledger, loading all expenses from the repository
    ///
    /// # Errors
    ///
    /// Propagates `CorruptStore` if the expense file exists but cannot be
    /// read as valid expense data. A missing file opens an empty ledger.
    pub fn open(repository: ExpenseRepository, audit: Option<AuditLogger>) -> TallyResult<Self> {
        let expenses = repository.load()?;
        Ok(Self {
            repository,
            audit,
            expenses,
        })
    }

    /// Number of expenses in the ledger
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check whether the ledger holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// All expenses paired with their current 1-based positions
    pub fn list_all(&self) -> Vec<(usize, Expense)> {
        self.expenses
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, expense)| (i + 1, expense))
            .collect()
    }

    /// Get the expense at a 1-based position
    pub fn get(&self, index: usize) -> TallyResult<&Expense> {
        let position = self.position_of(index)?;
        Ok(&self.expenses[position])
    }

    /// Append a new expense, returning its 1-based position
    ///
    /// The expense is persisted immediately. If the save fails the ledger
    /// is left unchanged.
    pub fn add(&mut self, expense: Expense) -> TallyResult<usize> {
        self.expenses.push(expense);

        if let Err(e) = self.repository.save(&self.expenses) {
            self.expenses.pop();
            return Err(e);
        }

        let index = self.expenses.len();
        if let Some(audit) = &self.audit {
            let _ = audit.log(&AuditEntry::add(index, &self.expenses[index - 1]));
        }

        Ok(index)
    }

    /// Update the expense at a 1-based position, returning the new record
    ///
    /// Every supplied field is validated before anything changes. An invalid
    /// field, an out-of-range index, or a failed save all leave the ledger
    /// exactly as it was.
    pub fn update(&mut self, index: usize, update: &ExpenseUpdate) -> TallyResult<Expense> {
        let position = self.position_of(index)?;

        let updated = update.apply_to(&self.expenses[position])?;
        let before = std::mem::replace(&mut self.expenses[position], updated.clone());

        if let Err(e) = self.repository.save(&self.expenses) {
            self.expenses[position] = before;
            return Err(e);
        }

        if let Some(audit) = &self.audit {
            let diff = diff_summary(&before, &updated);
            let _ = audit.log(&AuditEntry::update(index, &before, &updated, diff));
        }

        Ok(updated)
    }

    /// Delete the expense at a 1-based position, returning the removed record
    ///
    /// Positions of later expenses shift down by one. If the save fails the
    /// expense is restored to its place.
    pub fn delete(&mut self, index: usize) -> TallyResult<Expense> {
        let position = self.position_of(index)?;

        let removed = self.expenses.remove(position);

        if let Err(e) = self.repository.save(&self.expenses) {
            self.expenses.insert(position, removed);
            return Err(e);
        }

        if let Some(audit) = &self.audit {
            let _ = audit.log(&AuditEntry::delete(index, &removed));
        }

        Ok(removed)
    }

    /// Translate a 1-based index into a vector position
    fn position_of(&self, index: usize) -> TallyResult<usize> {
        if index == 0 || index > self.expenses.len() {
            return Err(TallyError::IndexOutOfRange {
                index,
                count: self.expenses.len(),
            });
        }
        Ok(index - 1)
    }
}

/// Build a field-by-field change summary for the audit log
fn diff_summary(before: &Expense, after: &Expense) -> Option<String> {
    let mut changes = Vec::new();
    if before.amount != after.amount {
        changes.push(format!("amount: {} -> {}", before.amount, after.amount));
    }
    if before.date != after.date {
        changes.push(format!("date: {} -> {}", before.date, after.date));
    }
    if before.note != after.note {
        changes.push(format!("note: '{}' -> '{}'", before.note, after.note));
    }
    if before.category != after.category {
        changes.push(format!(
            "category: '{}' -> '{}'",
            before.category, after.category
        ));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}
