//! Account and recurring expense display formatting
//!
//! Formats accounts and recurring expense templates as tables.

use crate::models::{Account, RecurringExpense};

use super::format::{format_amount, truncate};

/// Format a list of accounts as a table with a total row
pub fn format_account_list(accounts: &[Account], total: f64, symbol: &str) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    // Calculate column widths
    let name_width = accounts
        .iter()
        .map(|a| a.name.len())
        .max()
        .unwrap_or(4)
        .max(5);

    let type_width = accounts
        .iter()
        .map(|a| a.account_type.to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<type_width$}  {:>12}\n",
        "ID",
        "Name",
        "Type",
        "Balance",
        name_width = name_width,
        type_width = type_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<type_width$}  {:->12}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        type_width = type_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:<type_width$}  {:>12}\n",
            account.id.to_string(),
            account.name,
            account.account_type.to_string(),
            format_amount(account.balance, symbol),
            name_width = name_width,
            type_width = type_width,
        ));
    }

    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<type_width$}  {:>12}\n",
        "",
        "Total",
        "",
        format_amount(total, symbol),
        name_width = name_width,
        type_width = type_width,
    ));

    output
}

/// Format recurring expense templates, resolving paying accounts by name
pub fn format_recurring_list(
    expenses: &[RecurringExpense],
    accounts: &[Account],
    monthly_total: f64,
    symbol: &str,
) -> String {
    if expenses.is_empty() {
        return "No recurring expenses found.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<24}  {:>12}  {:<16}  {}\n",
        "ID", "Name", "Amount", "Account", "Flags"
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<24}  {:->12}  {:-<16}  {:-<14}\n",
        "", "", "", "", ""
    ));

    for expense in expenses {
        let account = expense
            .account_id
            .and_then(|id| accounts.iter().find(|a| a.id == id))
            .map(|a| truncate(&a.name, 16))
            .unwrap_or_else(|| "-".to_string());

        let mut flags = Vec::new();
        if expense.is_manual {
            flags.push("manual");
        }
        if !expense.active {
            flags.push("inactive");
        }

        output.push_str(&format!(
            "{:<12}  {:<24}  {:>12}  {:<16}  {}\n",
            expense.id.to_string(),
            truncate(&expense.name, 24),
            format_amount(expense.amount, symbol),
            account,
            flags.join(", "),
        ));
    }

    output.push_str(&format!(
        "\nMonthly total: {}\n",
        format_amount(monthly_total, symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountType;

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_account_list(&[], 0.0, "$"), "No accounts found.");
        assert_eq!(
            format_recurring_list(&[], &[], 0.0, "$"),
            "No recurring expenses found."
        );
    }

    #[test]
    fn test_account_table_total() {
        let accounts = vec![
            Account::with_balance("Checking", AccountType::Checking, 1000.0),
            Account::with_balance("Visa", AccountType::Credit, -250.0),
        ];

        let output = format_account_list(&accounts, 750.0, "$");
        assert!(output.contains("Credit Card"));
        assert!(output.contains("-$250.00"));
        assert!(output.contains("Total"));
        assert!(output.contains("$750.00"));
    }

    #[test]
    fn test_recurring_table() {
        let checking = Account::new("Checking", AccountType::Checking);
        let mut gym = RecurringExpense::new("Gym", 40.0);
        gym.active = false;
        let expenses = vec![
            RecurringExpense::new("Rent", 1500.0)
                .paid_from(checking.id)
                .manual(),
            gym,
        ];

        let output = format_recurring_list(&expenses, &[checking], 1500.0, "$");
        assert!(output.contains("Checking"));
        assert!(output.contains("manual"));
        assert!(output.contains("inactive"));
        assert!(output.contains("Monthly total: $1500.00"));
    }
}
