//! Recurring expense CLI commands

use clap::Subcommand;

use crate::client::BudgetClient;
use crate::display::{format_amount, format_recurring_list};
use crate::error::BudgetbookResult;
use crate::services::{AccountService, RecurringService};

use super::parse_amount;

/// Recurring expense subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// Create a recurring expense template
    Create {
        /// Expense name (e.g., "Rent")
        name: String,
        /// Monthly amount
        amount: String,
        /// Account the expense is paid from (name or ID)
        #[arg(short, long)]
        account: Option<String>,
        /// Paid by hand; shows up on the todo list of locked budgets
        #[arg(short, long)]
        manual: bool,
    },
    /// List recurring expense templates
    List,
}

/// Handle a recurring expense command
pub fn handle_recurring_command(
    client: &BudgetClient,
    cmd: RecurringCommands,
) -> BudgetbookResult<()> {
    let service = RecurringService::new(client);
    let accounts = AccountService::new(client);
    let symbol = &client.settings().currency_symbol;

    match cmd {
        RecurringCommands::Create {
            name,
            amount,
            account,
            manual,
        } => {
            let amount = parse_amount(&amount)?;
            let account_id = match account {
                Some(account) => Some(accounts.find(&account)?.id),
                None => None,
            };

            let expense = service.create(&name, amount, account_id, manual)?;

            println!("Created recurring expense: {}", expense.name);
            println!("  Amount: {}/month", format_amount(expense.amount, symbol));
            if expense.is_manual {
                println!("  Paid manually");
            }
            println!("  ID: {}", expense.id);
        }

        RecurringCommands::List => {
            let expenses = service.list()?;
            let accounts = accounts.list()?;
            let monthly_total = service.monthly_total()?;
            print!(
                "{}",
                format_recurring_list(&expenses, &accounts, monthly_total, symbol)
            );
        }
    }

    Ok(())
}
