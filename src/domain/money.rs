use thiserror::Error;

/// Amounts are plain binary floats. Totals inherit the usual rounding error,
/// so nothing here promises exact cent arithmetic.
pub type Amount = f64;

/// Format an amount with exactly two decimals, as shown to the user.
/// Example: 12.5 -> "12.50", -3.14159 -> "-3.14"
pub fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount)
}

/// Parse a decimal string into an amount.
/// Surrounding whitespace is ignored. Example: "12.50" -> 12.5, " -3 " -> -3.0
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }
    input
        .parse::<Amount>()
        .map_err(|_| ParseAmountError::InvalidFormat(input.to_string()))
}

/// Render an amount for the data file.
/// Uses the default float rendering, which `parse_amount` reads back exactly.
pub fn render_amount(amount: Amount) -> String {
    amount.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAmountError {
    #[error("empty amount")]
    Empty,
    #[error("invalid amount format: {0}")]
    InvalidFormat(String),
}
