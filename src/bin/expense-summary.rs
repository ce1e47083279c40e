use anyhow::Result;
use clap::Parser;
use expense_ledger::cli::{self, SummaryCli};

fn main() -> Result<()> {
    let cli = SummaryCli::parse();
    cli::init_logging();
    cli.run()
}
