use tracing::warn;

use crate::domain::{CategoryTotals, Expense, compute_category_totals};
use crate::storage::{ExpenseRepository, LoadStats};

use super::{LedgerConfig, LedgerError};

/// Ordered, file-backed collection of expenses.
/// This is the primary interface for any client (shell, summary report, tests).
///
/// The ledger is loaded once at construction, only ever grows through
/// [`LedgerService::append`], and is rewritten in full after every append.
pub struct LedgerService {
    config: LedgerConfig,
    repo: ExpenseRepository,
    expenses: Vec<Expense>,
}

impl LedgerService {
    /// Create a ledger backed by the configured data file, loading it if present.
    ///
    /// Load failures are reported as a warning and leave the ledger with
    /// whatever was read before the failure.
    pub fn open(config: LedgerConfig) -> Self {
        let mut service = Self::unloaded(config);
        if let Err(err) = service.load() {
            warn!("{err}. Starting fresh.");
        }
        service
    }

    /// Like [`LedgerService::open`], but hands the load error back instead of logging it.
    pub fn try_open(config: LedgerConfig) -> Result<Self, LedgerError> {
        let mut service = Self::unloaded(config);
        service.load()?;
        Ok(service)
    }

    fn unloaded(config: LedgerConfig) -> Self {
        let repo = ExpenseRepository::new(config.data_path.clone());
        Self {
            config,
            repo,
            expenses: Vec::new(),
        }
    }

    fn load(&mut self) -> Result<LoadStats, LedgerError> {
        self.repo
            .load_into(&mut self.expenses)
            .map_err(LedgerError::Load)
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // ========================
    // Mutation
    // ========================

    /// Append an expense and rewrite the data file.
    ///
    /// A save failure is reported as a warning and returned, but the expense
    /// stays in memory.
    pub fn append(&mut self, expense: Expense) -> Result<(), LedgerError> {
        self.expenses.push(expense);
        self.save().inspect_err(|err| warn!("{err}"))
    }

    /// Rewrite the data file from the in-memory ledger.
    pub fn save(&self) -> Result<(), LedgerError> {
        self.repo
            .save_all(&self.expenses)
            .map_err(LedgerError::Save)
    }

    // ========================
    // Queries
    // ========================

    /// Iterate `(index, expense)` pairs in insertion order, `index` starting at 1.
    pub fn enumerate(&self) -> impl Iterator<Item = (usize, &Expense)> + '_ {
        self.expenses
            .iter()
            .enumerate()
            .map(|(pos, expense)| (pos + 1, expense))
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Sum of amounts per category, keyed in first-seen order.
    pub fn totals_by_category(&self) -> CategoryTotals {
        compute_category_totals(&self.expenses)
    }
}
