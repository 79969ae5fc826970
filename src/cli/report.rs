//! Report CLI commands

use crate::error::TallyResult;
use crate::reports::SummaryReport;
use crate::services::Ledger;

/// Handle the summary command
pub fn handle_summary(ledger: &Ledger) -> TallyResult<()> {
    if ledger.is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }

    let report = SummaryReport::generate(ledger.expenses());
    print!("{}", report.format_terminal());

    Ok(())
}
