// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use anyhow::Result;
use expense_ledger::cli::Shell;
use expense_ledger::{LedgerConfig, LedgerService};
use tempfile::TempDir;

/// A temporary working directory holding a data file.
pub struct TestLedger {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl TestLedger {
    /// Fresh directory, no data file yet.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let data_path = temp_dir.path().join("expenses.txt");
        Ok(Self {
            temp_dir,
            data_path,
        })
    }

    /// Directory whose data file starts with `contents`.
    pub fn with_file(contents: &str) -> Result<Self> {
        let ledger = Self::new()?;
        fs::write(&ledger.data_path, contents)?;
        Ok(ledger)
    }

    pub fn config(&self) -> LedgerConfig {
        LedgerConfig::new(&self.data_path)
    }

    /// Open the ledger the way a new process would.
    pub fn open(&self) -> LedgerService {
        LedgerService::open(self.config())
    }

    pub fn read_file(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.data_path)?)
    }

    /// Run one shell session over `input` and return everything it printed.
    pub fn run_session(&self, input: &str) -> Result<String> {
        let mut output = Vec::new();
        Shell::new(self.open(), Cursor::new(input.to_string()), &mut output).run()?;
        Ok(String::from_utf8(output)?)
    }
}

/// Join input lines the way a user would type them.
pub fn lines(input: &[&str]) -> String {
    input.iter().map(|line| format!("{line}\n")).collect()
}

/// Assert that `needles` appear in `haystack` in the given order.
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!("expected {needle:?} after byte {from} in:\n{haystack}"),
        }
    }
}
