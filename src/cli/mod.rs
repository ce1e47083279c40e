use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;

use crate::application::{LedgerConfig, LedgerService};

mod shell;
mod summary;

pub use shell::Shell;
pub use summary::write_summary;

/// Expense Ledger - record expenses and see where the money goes
#[derive(Parser)]
#[command(name = "expense-ledger")]
#[command(about = "An interactive expense ledger stored in ./expenses.txt")]
#[command(version)]
pub struct Cli {}

impl Cli {
    pub fn run(self) -> Result<()> {
        let ledger = LedgerService::open(LedgerConfig::default());
        let stdin = io::stdin().lock();
        let stdout = io::stdout().lock();

        Shell::new(ledger, stdin, stdout)
            .run()
            .context("Failed to talk to the terminal")
    }
}

/// Expense Summary - print totals per category and exit
#[derive(Parser)]
#[command(name = "expense-summary")]
#[command(about = "Print totals per category from ./expenses.txt")]
#[command(version)]
pub struct SummaryCli {}

impl SummaryCli {
    pub fn run(self) -> Result<()> {
        let stdout = io::stdout().lock();
        write_summary(&LedgerConfig::default(), stdout).context("Failed to write summary")
    }
}

/// Install the stderr diagnostic subscriber shared by both binaries.
/// Only warnings and errors are shown, without timestamps.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .init();
}
