use std::path::{Path, PathBuf};

/// Data file used when nothing else is configured, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "expenses.txt";

/// Construction-time configuration of the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    pub data_path: PathBuf,
}

impl LedgerConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}
