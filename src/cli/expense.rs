//! Expense CLI commands
//!
//! Implements the add/list/edit/delete commands, bridging clap argument
//! parsing with the expense ledger.

use clap::Args;

use crate::display::{format_expense_details, format_expense_table};
use crate::error::TallyResult;
use crate::models::{parse_date, Expense, ExpenseUpdate};
use crate::reports::{filter_by_category, filter_by_date};
use crate::services::Ledger;

/// Arguments for recording a new expense
#[derive(Args)]
pub struct AddArgs {
    /// Amount spent (e.g. "12.50")
    pub amount: String,
    /// What the money was spent on
    pub note: Option<String>,
    /// Date of the expense (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Category label (e.g. "Food")
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for listing expenses
#[derive(Args)]
pub struct ListArgs {
    /// Only show expenses in this category
    #[arg(short, long)]
    pub category: Option<String>,
    /// Only show expenses on this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for editing an expense
#[derive(Args)]
pub struct EditArgs {
    /// Index of the expense to edit (as shown by 'list')
    pub index: usize,
    /// New amount
    #[arg(short, long)]
    pub amount: Option<String>,
    /// New date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
    /// New note
    #[arg(short, long)]
    pub note: Option<String>,
    /// New category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for deleting an expense
#[derive(Args)]
pub struct DeleteArgs {
    /// Index of the expense to delete (as shown by 'list')
    pub index: usize,
    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,
}

/// Handle the add command
pub fn handle_add(ledger: &mut Ledger, args: AddArgs) -> TallyResult<()> {
    // Default the date to today
    let date_raw = match args.date {
        Some(date_str) => date_str,
        None => chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
    };

    let expense = Expense::build(
        &args.amount,
        &date_raw,
        args.note.as_deref().unwrap_or(""),
        args.category.as_deref().unwrap_or(""),
    )?;

    let index = ledger.add(expense)?;

    println!("Recorded expense:");
    print!("{}", format_expense_details(index, ledger.get(index)?));

    Ok(())
}

/// Handle the list command
pub fn handle_list(ledger: &Ledger, args: ListArgs) -> TallyResult<()> {
    if ledger.is_empty() {
        println!("No expenses found.");
        return Ok(());
    }

    let mut entries = ledger.list_all();

    // Filters compose; indices stay the full-ledger indices
    if let Some(label) = &args.category {
        entries = filter_by_category(&entries, label);
    }

    if let Some(date_str) = &args.date {
        // Same parsing as add/edit, so padded input filters instead of erroring
        entries = filter_by_date(&entries, parse_date(date_str)?);
    }

    if entries.is_empty() {
        println!("No expenses match the filter.");
        return Ok(());
    }

    println!("{}", format_expense_table(&entries));
    println!("\nShowing {} of {} expenses", entries.len(), ledger.len());

    Ok(())
}

/// Handle the edit command
pub fn handle_edit(ledger: &mut Ledger, args: EditArgs) -> TallyResult<()> {
    let update = ExpenseUpdate {
        amount: args.amount,
        date: args.date,
        note: args.note,
        category: args.category,
    };

    if update.is_empty() {
        println!("Nothing to change.");
        return Ok(());
    }

    let updated = ledger.update(args.index, &update)?;

    println!("Updated expense:");
    print!("{}", format_expense_details(args.index, &updated));

    Ok(())
}

/// Handle the delete command
pub fn handle_delete(ledger: &mut Ledger, args: DeleteArgs) -> TallyResult<()> {
    if !args.force {
        let expense = ledger.get(args.index)?;
        println!("About to delete expense:");
        print!("{}", format_expense_details(args.index, expense));
        println!();
        println!("Use --force to confirm deletion");
        return Ok(());
    }

    let deleted = ledger.delete(args.index)?;
    println!("Deleted expense #{}: {}", args.index, deleted);

    Ok(())
}
