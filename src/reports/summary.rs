//! Expense summary report
//!
//! Aggregates the expense collection into a grand total plus per-category
//! and per-month breakdowns. Aggregation is pure: it reads the records and
//! never touches storage.

use std::collections::BTreeMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Expense, Money};

/// Sum of all expense amounts
pub fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Totals grouped by exact category label, sorted by label
pub fn by_category(expenses: &[Expense]) -> BTreeMap<String, Money> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_insert(Money::zero()) += expense.amount;
    }
    totals
}

/// Totals grouped by `YYYY-MM` month key, sorted chronologically
pub fn by_month(expenses: &[Expense]) -> BTreeMap<String, Money> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.month_key()).or_insert(Money::zero()) += expense.amount;
    }
    totals
}

/// Summary of the whole expense collection
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// Grand total across all expenses
    pub total: Money,
    /// Number of expenses
    pub expense_count: usize,
    /// Per-category totals, sorted by category label
    pub by_category: BTreeMap<String, Money>,
    /// Per-month totals, sorted chronologically
    pub by_month: BTreeMap<String, Money>,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Total")]
    total: String,
}

impl SummaryReport {
    /// Generate a summary over the given expenses
    pub fn generate(expenses: &[Expense]) -> Self {
        Self {
            total: total(expenses),
            expense_count: expenses.len(),
            by_category: by_category(expenses),
            by_month: by_month(expenses),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Expense Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("Total spent: {}\n", self.total));
        output.push_str(&format!("Expenses:    {}\n", self.expense_count));

        let category_rows: Vec<CategoryRow> = self
            .by_category
            .iter()
            .map(|(category, total)| CategoryRow {
                category: category.clone(),
                total: total.to_string(),
            })
            .collect();

        output.push_str("\nBy category:\n");
        output.push_str(&Table::new(category_rows).with(Style::psql()).to_string());
        output.push('\n');

        let month_rows: Vec<MonthRow> = self
            .by_month
            .iter()
            .map(|(month, total)| MonthRow {
                month: month.clone(),
                total: total.to_string(),
            })
            .collect();

        output.push_str("\nBy month:\n");
        output.push_str(&Table::new(month_rows).with(Style::psql()).to_string());
        output.push('\n');

        output
    }
}
