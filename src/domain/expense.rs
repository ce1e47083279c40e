use std::fmt;

use super::{Amount, format_amount};

/// A single expense entry.
/// Expenses have no identifier: they are told apart only by their position in the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    date: String,
    amount: Amount,
    category: String,
    description: String,
}

impl Expense {
    pub fn new(
        date: impl Into<String>,
        amount: Amount,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    /// Free text, never parsed (e.g. "2025-08-21").
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Render as a numbered list line, `index` being 1-based.
    /// Example: "1. 2025-08-21 - 12.50 [Food] lunch"
    pub fn render(&self, index: usize) -> String {
        format!(
            "{}. {} - {} [{}] {}",
            index,
            self.date,
            format_amount(self.amount),
            self.category,
            self.description
        )
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} {}: {}",
            self.date,
            format_amount(self.amount),
            self.category,
            self.description
        )
    }
}

/// Replace every tab and every newline with a single space.
/// The data file has no escaping, so these characters cannot survive a save.
pub fn sanitize_description(description: &str) -> String {
    description.replace(['\t', '\n'], " ")
}
