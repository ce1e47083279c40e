use std::collections::HashMap;

use super::{Amount, Expense};

/// Per-category sums, iterated in first-seen order.
/// Categories keep the position of their earliest occurrence in the ledger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<(String, Amount)>,
    positions: HashMap<String, usize>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `category`, registering the category if unseen.
    pub fn add(&mut self, category: &str, amount: Amount) {
        match self.positions.get(category) {
            Some(&pos) => self.entries[pos].1 += amount,
            None => {
                self.positions
                    .insert(category.to_string(), self.entries.len());
                self.entries.push((category.to_string(), amount));
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<Amount> {
        self.positions.get(category).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(category, _)| category.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Amount)> {
        self.entries
            .iter()
            .map(|(category, total)| (category.as_str(), *total))
    }
}

impl<'a> FromIterator<&'a Expense> for CategoryTotals {
    fn from_iter<I: IntoIterator<Item = &'a Expense>>(iter: I) -> Self {
        let mut totals = CategoryTotals::new();
        for expense in iter {
            totals.add(expense.category(), expense.amount());
        }
        totals
    }
}

/// Compute totals per category over a list of expenses.
/// Sums run left to right in ledger order, without compensation.
pub fn compute_category_totals(expenses: &[Expense]) -> CategoryTotals {
    expenses.iter().collect()
}
