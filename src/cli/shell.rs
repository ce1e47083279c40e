use std::io::{self, BufRead, Write};

use crate::application::LedgerService;
use crate::domain::{Expense, format_amount, parse_amount};

const MENU: &str = "\nExpense Tracker Menu:\n\
                    1. Add expense\n\
                    2. List expenses\n\
                    3. Show total by category\n\
                    0. Exit\n";

/// Menu-driven loop over a ledger.
///
/// Reads one command per line from `input` and writes every prompt and
/// message to `output`. Only failures of `input` or `output` end the loop
/// early; ledger problems are reported and the loop continues.
pub struct Shell<R, W> {
    ledger: LedgerService,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(ledger: LedgerService, input: R, output: W) -> Self {
        Self {
            ledger,
            input,
            output,
        }
    }

    pub fn ledger(&self) -> &LedgerService {
        &self.ledger
    }

    pub fn into_ledger(self) -> LedgerService {
        self.ledger
    }

    /// Run until the user picks `0` or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.output.write_all(MENU.as_bytes())?;
            let Some(choice) = self.prompt_line("Choose: ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.add_expense()?,
                "2" => self.list_expenses()?,
                "3" => self.show_totals()?,
                "0" => break,
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()
    }

    fn add_expense(&mut self) -> io::Result<()> {
        let date = self.prompt_field("Date (YYYY-MM-DD): ")?;
        let amount = match parse_amount(&self.prompt_field("Amount: ")?) {
            Ok(amount) => amount,
            Err(_) => {
                return writeln!(self.output, "Invalid number. Please try again.");
            }
        };
        let category = self.prompt_field("Category: ")?;
        let description = self.prompt_field("Description: ")?;

        // Save failures are already reported by the ledger; the expense stays in memory.
        let _ = self
            .ledger
            .append(Expense::new(date, amount, category, description));
        writeln!(self.output, "Expense added successfully.")
    }

    fn list_expenses(&mut self) -> io::Result<()> {
        if self.ledger.is_empty() {
            return writeln!(self.output, "No expenses recorded yet.");
        }
        for (index, expense) in self.ledger.enumerate() {
            writeln!(self.output, "{}", expense.render(index))?;
        }
        Ok(())
    }

    fn show_totals(&mut self) -> io::Result<()> {
        if self.ledger.is_empty() {
            return writeln!(self.output, "No expenses recorded yet.");
        }
        writeln!(self.output, "Totals by category:")?;
        for (category, total) in self.ledger.totals_by_category().iter() {
            writeln!(self.output, "{}: {}", category, format_amount(total))?;
        }
        Ok(())
    }

    /// Prompt for a sub-field. End of input counts as an empty answer.
    fn prompt_field(&mut self, label: &str) -> io::Result<String> {
        Ok(self.prompt_line(label)?.unwrap_or_default())
    }

    fn prompt_line(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line without its terminator, or `None` at end of input.
    /// Bytes that are not valid UTF-8 become replacement characters.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::TempDir;

    use super::*;
    use crate::application::LedgerConfig;

    fn run_shell(ledger: LedgerService, input: &str) -> (LedgerService, String) {
        run_shell_bytes(ledger, input.as_bytes())
    }

    fn run_shell_bytes(ledger: LedgerService, input: &[u8]) -> (LedgerService, String) {
        let mut output = Vec::new();
        let mut shell = Shell::new(ledger, Cursor::new(input.to_vec()), &mut output);
        shell.run().unwrap();
        let ledger = shell.into_ledger();
        (ledger, String::from_utf8(output).unwrap())
    }

    fn empty_ledger(temp_dir: &TempDir) -> LedgerService {
        LedgerService::open(LedgerConfig::new(temp_dir.path().join("expenses.txt")))
    }

    #[test]
    fn test_menu_is_printed_each_iteration() {
        let temp_dir = TempDir::new().unwrap();
        let (_, output) = run_shell(empty_ledger(&temp_dir), "9\n0\n");

        assert_eq!(output.matches("Expense Tracker Menu:").count(), 2);
        assert!(output.contains("1. Add expense\n2. List expenses\n3. Show total by category\n0. Exit\nChoose: "));
    }

    #[test]
    fn test_unknown_choice() {
        let temp_dir = TempDir::new().unwrap();
        let (_, output) = run_shell(empty_ledger(&temp_dir), "add\n\n0\n");

        assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_choice_is_not_trimmed() {
        let temp_dir = TempDir::new().unwrap();
        let (_, output) = run_shell(empty_ledger(&temp_dir), " 2\n0\n");
        assert!(output.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_end_of_input_at_menu_exits() {
        let temp_dir = TempDir::new().unwrap();
        let (_, output) = run_shell(empty_ledger(&temp_dir), "");
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_crlf_input_lines() {
        let temp_dir = TempDir::new().unwrap();
        let (ledger, output) = run_shell(
            empty_ledger(&temp_dir),
            "1\r\n2025-01-01\r\n4.20\r\nFood\r\nsnack\r\n0\r\n",
        );

        assert!(output.contains("Expense added successfully."));
        assert_eq!(
            ledger.expenses(),
            &[Expense::new("2025-01-01", 4.2, "Food", "snack")]
        );
    }

    #[test]
    fn test_end_of_input_at_sub_prompt_is_empty_answer() {
        let temp_dir = TempDir::new().unwrap();
        let (ledger, output) = run_shell(empty_ledger(&temp_dir), "1\n2025-01-01\n3\nFood");

        // Description is missing entirely: recorded as empty, then the menu sees EOF.
        assert!(output.contains("Expense added successfully."));
        assert_eq!(ledger.expenses(), &[Expense::new("2025-01-01", 3.0, "Food", "")]);
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_at_amount_prompt_is_invalid_number() {
        let temp_dir = TempDir::new().unwrap();
        let (ledger, output) = run_shell(empty_ledger(&temp_dir), "1\n2025-01-01\n");

        assert!(output.contains("Invalid number. Please try again."));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_invalid_amount_skips_remaining_prompts() {
        let temp_dir = TempDir::new().unwrap();
        let (_, output) = run_shell(empty_ledger(&temp_dir), "1\n2025-01-01\ntwelve\n0\n");

        assert!(output.contains("Invalid number. Please try again."));
        assert!(!output.contains("Category: "));
    }

    #[test]
    fn test_save_failure_keeps_expense_in_memory() {
        let temp_dir = TempDir::new().unwrap();
        let config = LedgerConfig::new(temp_dir.path().join("missing-dir").join("expenses.txt"));
        let (ledger, output) = run_shell(
            LedgerService::open(config),
            "1\n2025-01-01\n1\nX\nkept\n2\n0\n",
        );

        assert!(output.contains("Expense added successfully."));
        assert!(output.contains("1. 2025-01-01 - 1.00 [X] kept"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_invalid_utf8_input_is_decoded_lossily() {
        let temp_dir = TempDir::new().unwrap();
        let (ledger, output) = run_shell_bytes(
            empty_ledger(&temp_dir),
            b"1\n2025-01-01\n5\nFood\ncaf\xE9\n2\n0\n",
        );

        assert!(output.contains("Expense added successfully."));
        assert!(output.contains("1. 2025-01-01 - 5.00 [Food] caf\u{FFFD}"));
        assert!(output.ends_with("Goodbye!\n"));
        assert_eq!(ledger.expenses()[0].description(), "caf\u{FFFD}");
    }

    #[test]
    fn test_invalid_utf8_menu_choice_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let (_, output) = run_shell_bytes(empty_ledger(&temp_dir), b"\xff\n0\n");

        assert!(output.contains("Invalid choice. Please try again."));
        assert!(output.ends_with("Goodbye!\n"));
    }
}
