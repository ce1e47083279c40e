// Application layer - the ledger store and its configuration.
// Clients (the interactive shell, the summary report) go through LedgerService
// and never touch the data file directly.

pub mod config;
pub mod error;
pub mod service;

pub use config::*;
pub use error::*;
pub use service::*;
