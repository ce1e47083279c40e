use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Failed to read existing expenses: {0:#}")]
    Load(#[source] anyhow::Error),

    #[error("Failed to write expenses: {0:#}")]
    Save(#[source] anyhow::Error),
}
