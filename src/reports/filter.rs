//! Index-preserving expense filters
//!
//! Filters operate on `(position, expense)` pairs from a listing, so the
//! positions shown in filtered output still address the full collection.
//! Matching is exact: category labels are compared case-sensitively.

use chrono::NaiveDate;

use crate::models::Expense;

/// Keep expenses whose category label matches exactly
pub fn filter_by_category(
    expenses: &[(usize, Expense)],
    category: &str,
) -> Vec<(usize, Expense)> {
    expenses
        .iter()
        .filter(|(_, expense)| expense.category == category)
        .cloned()
        .collect()
}

/// Keep expenses dated exactly on the given day
pub fn filter_by_date(expenses: &[(usize, Expense)], date: NaiveDate) -> Vec<(usize, Expense)> {
    expenses
        .iter()
        .filter(|(_, expense)| expense.date == date)
        .cloned()
        .collect()
}
