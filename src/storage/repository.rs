use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use tracing::debug;

use crate::domain::{Expense, parse_amount, render_amount, sanitize_description};

use super::{FIELD_COUNT, FIELD_SEPARATOR};

/// Outcome of reading the data file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub loaded: usize,
    pub skipped: usize,
}

/// Repository persisting expenses as a tab-separated flat file.
///
/// Each line is `date \t amount \t category \t description`. There is no
/// header, no quoting and no escaping. The file handle is held only for the
/// duration of a single load or save.
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    // ========================
    // Load
    // ========================

    /// Append every well-formed line of the data file to `sink`.
    ///
    /// A missing file is not an error and leaves `sink` untouched. Lines with
    /// fewer than four fields, an unparseable amount or invalid UTF-8 are
    /// skipped. On an I/O error, expenses read so far stay in `sink`.
    pub fn load_into(&self, sink: &mut Vec<Expense>) -> Result<LoadStats> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(LoadStats::default()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to open {}", self.path.display()));
            }
        };

        let stats = read_expenses(file, sink)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        debug!(
            path = %self.path.display(),
            loaded = stats.loaded,
            skipped = stats.skipped,
            "loaded expenses"
        );
        Ok(stats)
    }

    /// Read the whole data file into a fresh list.
    pub fn load_all(&self) -> Result<Vec<Expense>> {
        let mut expenses = Vec::new();
        self.load_into(&mut expenses)?;
        Ok(expenses)
    }

    // ========================
    // Save
    // ========================

    /// Truncate the data file and write every expense, one per line.
    /// Tabs and newlines in descriptions become spaces. Date and category are
    /// written as-is, so a tab inside either one shifts the fields on reload.
    pub fn save_all(&self, expenses: &[Expense]) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(FIELD_SEPARATOR)
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_path(&self.path)
            .with_context(|| format!("Failed to create {}", self.path.display()))?;

        for expense in expenses {
            let amount = render_amount(expense.amount());
            let description = sanitize_description(expense.description());
            writer
                .write_record([
                    expense.date(),
                    amount.as_str(),
                    expense.category(),
                    description.as_str(),
                ])
                .with_context(|| format!("Failed to write {}", self.path.display()))?;
        }

        writer
            .flush()
            .with_context(|| format!("Failed to flush {}", self.path.display()))?;
        debug!(path = %self.path.display(), count = expenses.len(), "saved expenses");
        Ok(())
    }
}

/// Decode expenses from any reader in the data file format.
fn read_expenses<R: Read>(reader: R, sink: &mut Vec<Expense>) -> Result<LoadStats, csv::Error> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(FIELD_SEPARATOR)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::CRLF)
        .from_reader(reader);
    let mut stats = LoadStats::default();

    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(err),
            Err(err) => {
                debug!(error = %err, "skipping unreadable line");
                stats.skipped += 1;
                continue;
            }
        };

        match record_to_expense(&record) {
            Some(expense) => {
                sink.push(expense);
                stats.loaded += 1;
            }
            None => {
                let line = record.position().map_or(0, |pos| pos.line());
                debug!(line, "skipping malformed line");
                stats.skipped += 1;
            }
        }
    }

    Ok(stats)
}

fn record_to_expense(record: &StringRecord) -> Option<Expense> {
    if record.len() < FIELD_COUNT {
        return None;
    }
    let amount = parse_amount(&record[1]).ok()?;
    let description = if record.len() == FIELD_COUNT {
        record[3].to_string()
    } else {
        record
            .iter()
            .skip(FIELD_COUNT - 1)
            .collect::<Vec<_>>()
            .join("\t")
    };
    Some(Expense::new(&record[0], amount, &record[2], description))
}
