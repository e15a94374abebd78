//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod budget;
pub mod recurring;
pub mod todo;

pub use account::{handle_account_command, AccountCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use recurring::{handle_recurring_command, RecurringCommands};
pub use todo::{handle_todo_command, TodoCommands};

use crate::error::{BudgetbookError, BudgetbookResult};

/// Largest magnitude accepted for a typed amount
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// Parse an amount typed by the user, e.g. `1500`, `1,500.00` or `$12.50`
pub fn parse_amount(s: &str) -> BudgetbookResult<f64> {
    let trimmed = s.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let cleaned: String = rest
        .trim_start_matches(|c: char| !c.is_ascii_digit() && c != '.')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value > MAX_AMOUNT => Err(BudgetbookError::Validation(format!(
            "Amount '{}' is out of range (at most {:.0})",
            s, MAX_AMOUNT
        ))),
        Ok(value) if value.is_finite() => Ok(if negative { -value } else { value }),
        _ => Err(BudgetbookError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '1500' or '1500.00'",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1500").unwrap(), 1500.0);
        assert_eq!(parse_amount("1,500.25").unwrap(), 1500.25);
        assert_eq!(parse_amount("$12.50").unwrap(), 12.5);
        assert_eq!(parse_amount("-$40").unwrap(), -40.0);
        assert!(parse_amount("twelve").unwrap_err().is_validation());
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn test_parse_amount_range() {
        assert_eq!(parse_amount("1000000000000").unwrap(), MAX_AMOUNT);
        assert_eq!(parse_amount("-1000000000000").unwrap(), -MAX_AMOUNT);
        assert!(parse_amount("-1e18").unwrap_err().is_validation());
        assert!(parse_amount("1000000000000.01").unwrap_err().is_validation());
    }
}
