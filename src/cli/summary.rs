use std::io::{self, Write};

use crate::application::{LedgerConfig, LedgerService};
use crate::domain::format_amount;

/// Write a one-shot report of totals per category for the configured data file.
pub fn write_summary<W: Write>(config: &LedgerConfig, mut out: W) -> io::Result<()> {
    if !config.data_path().exists() {
        writeln!(
            out,
            "No expenses file found at '{}'. Run expense-ledger first.",
            config.data_path().display()
        )?;
        return out.flush();
    }

    let ledger = LedgerService::open(config.clone());
    let totals = ledger.totals_by_category();
    if totals.is_empty() {
        writeln!(out, "No expenses recorded yet.")?;
        return out.flush();
    }

    writeln!(out, "Summary of expenses by category:")?;
    for (category, total) in totals.iter() {
        writeln!(out, "  {}: {}", category, format_amount(total))?;
    }
    out.flush()
}
