//! Expense record model
//!
//! A single spending record with a validated amount and date. All field
//! validation lives here so every write path (create and update) enforces
//! the same rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{TallyError, TallyResult};

use super::money::Money;

/// Category assigned when none is provided
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A single spending record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent (always positive)
    pub amount: Money,

    /// Date of the expense
    pub date: NaiveDate,

    /// Free-text description, stored verbatim
    #[serde(default)]
    pub note: String,

    /// Category label (trimmed, never empty)
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    UNCATEGORIZED.to_string()
}

impl Expense {
    /// Build a validated expense from raw user input
    ///
    /// The note is kept verbatim. The category is trimmed, and a blank
    /// category becomes [`UNCATEGORIZED`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` or `InvalidDate` if the respective field
    /// fails validation.
    pub fn build(
        amount_raw: &str,
        date_raw: &str,
        note_raw: &str,
        category_raw: &str,
    ) -> TallyResult<Self> {
        Ok(Self {
            amount: parse_amount(amount_raw)?,
            date: parse_date(date_raw)?,
            note: note_raw.to_string(),
            category: normalize_category(category_raw),
        })
    }

    /// The `YYYY-MM` grouping key for this expense's date
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format("%Y-%m-%d"), self.amount)?;
        if !self.note.is_empty() {
            write!(f, " {}", self.note)?;
        }
        write!(f, " ({})", self.category)
    }
}

/// Parse and validate an amount string
///
/// Accepts positive decimal notation ("50", "10.50", "$3.99"). Zero and
/// negative amounts are rejected.
pub fn parse_amount(raw: &str) -> TallyResult<Money> {
    let amount =
        Money::parse(raw).map_err(|_| TallyError::InvalidAmount(raw.trim().to_string()))?;
    if !amount.is_positive() {
        return Err(TallyError::InvalidAmount(raw.trim().to_string()));
    }
    Ok(amount)
}

/// Parse and validate a date string in `YYYY-MM-DD` format
pub fn parse_date(raw: &str) -> TallyResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| TallyError::InvalidDate(raw.trim().to_string()))
}

/// Normalize a category label: trim whitespace, blank becomes [`UNCATEGORIZED`]
pub fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNCATEGORIZED.to_string()
    } else {
        trimmed.to_string()
    }
}

/// A partial update to an existing expense
///
/// Fields left as `None` are untouched. Raw values are validated when the
/// update is applied, and a single invalid field rejects the whole update.
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub amount: Option<String>,
    pub date: Option<String>,
    pub note: Option<String>,
    pub category: Option<String>,
}

impl ExpenseUpdate {
    /// Check whether the update carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.date.is_none()
            && self.note.is_none()
            && self.category.is_none()
    }

    /// Apply this update to an expense, producing the updated record
    ///
    /// Validates every supplied field before anything else, so an invalid
    /// value leaves no partial result behind.
    pub fn apply_to(&self, expense: &Expense) -> TallyResult<Expense> {
        let mut updated = expense.clone();
        if let Some(raw) = &self.amount {
            updated.amount = parse_amount(raw)?;
        }
        if let Some(raw) = &self.date {
            updated.date = parse_date(raw)?;
        }
        if let Some(note) = &self.note {
            updated.note = note.clone();
        }
        if let Some(raw) = &self.category {
            updated.category = normalize_category(raw);
        }
        Ok(updated)
    }
}
