//! Account CLI commands
//!
//! Implements CLI commands for account management.

use clap::Subcommand;

use crate::client::BudgetClient;
use crate::display::{format_account_list, format_amount};
use crate::error::{BudgetbookError, BudgetbookResult};
use crate::models::AccountType;
use crate::services::AccountService;

use super::parse_amount;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    Create {
        /// Account name
        name: String,
        /// Account type (checking, savings, credit, cash, investment, other)
        #[arg(short = 't', long, default_value = "checking")]
        account_type: String,
        /// Current balance (e.g., "1000.00" or "1000")
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
    },
    /// List all accounts
    List,
}

/// Handle an account command
pub fn handle_account_command(client: &BudgetClient, cmd: AccountCommands) -> BudgetbookResult<()> {
    let service = AccountService::new(client);
    let symbol = &client.settings().currency_symbol;

    match cmd {
        AccountCommands::Create {
            name,
            account_type,
            balance,
        } => {
            let account_type = AccountType::parse(&account_type).ok_or_else(|| {
                BudgetbookError::Validation(format!(
                    "Invalid account type: '{}'. Valid types: checking, savings, credit, cash, investment, other",
                    account_type
                ))
            })?;
            let balance = parse_amount(&balance)?;

            let account = service.create(&name, account_type, balance)?;

            println!("Created account: {}", account.name);
            println!("  Type: {}", account.account_type);
            println!("  Balance: {}", format_amount(account.balance, symbol));
            println!("  ID: {}", account.id);
        }

        AccountCommands::List => {
            let accounts = service.list()?;
            let total = service.total_balance()?;
            print!("{}", format_account_list(&accounts, total, symbol));
        }
    }

    Ok(())
}
