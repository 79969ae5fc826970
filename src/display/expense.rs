//! Expense display formatting
//!
//! Provides utilities for formatting expenses for terminal display,
//! including the numbered listing table and single-expense detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Note")]
    note: String,
}

/// Format a numbered expense listing as a table
///
/// The first column shows each expense's position in the full collection,
/// so filtered listings keep their original numbering.
pub fn format_expense_table(expenses: &[(usize, Expense)]) -> String {
    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|(index, expense)| ExpenseRow {
            index: *index,
            date: expense.date.format("%Y-%m-%d").to_string(),
            amount: expense.amount.to_string(),
            category: expense.category.clone(),
            note: truncate(&expense.note, 40),
        })
        .collect();

    Table::new(rows).with(Style::psql()).to_string()
}

/// Format a single expense for display
pub fn format_expense_details(index: usize, expense: &Expense) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense #{}\n", index));
    output.push_str(&format!("Date:     {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!("Amount:   {}\n", expense.amount));
    output.push_str(&format!("Category: {}\n", expense.category));

    if !expense.note.is_empty() {
        output.push_str(&format!("Note:     {}\n", expense.note));
    }

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
