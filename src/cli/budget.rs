//! Budget CLI commands
//!
//! Implements CLI commands for monthly budgets: listing, the detail view,
//! draft editing and locking.

use chrono::{Datelike, Utc};
use clap::Subcommand;

use crate::client::BudgetClient;
use crate::display::{format_amount, format_budget_cards, format_budget_detail};
use crate::error::{BudgetbookError, BudgetbookResult};
use crate::models::LineItemKind;
use crate::services::{AccountService, BudgetService};

use super::parse_amount;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// List budgets, newest first
    List,

    /// Show a budget with its line items and status
    Show {
        /// Budget ID (full or short, e.g. "bud-1a2b3c4d")
        budget: String,
    },

    /// Create a draft budget for a month
    Create {
        /// Month as YYYY-MM (defaults to the current month)
        month: Option<String>,
        /// Do not copy active recurring expenses into the budget
        #[arg(long)]
        no_recurring: bool,
    },

    /// Add a line item to a draft budget
    Add {
        /// Budget ID
        budget: String,
        /// Section: income, expense or savings
        kind: String,
        /// Line item name
        name: String,
        /// Amount (e.g., "100" or "100.00")
        amount: String,
        /// Account the money comes from or goes to (name or ID)
        #[arg(short, long)]
        account: Option<String>,
    },

    /// Lock a draft budget and generate its todo list
    Lock {
        /// Budget ID
        budget: String,
    },

    /// Return a locked budget to draft
    Unlock {
        /// Budget ID
        budget: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(client: &BudgetClient, cmd: BudgetCommands) -> BudgetbookResult<()> {
    let service = BudgetService::new(client);
    let symbol = &client.settings().currency_symbol;

    match cmd {
        BudgetCommands::List => {
            let cards = service.list_cards()?;
            print!("{}", format_budget_cards(&cards, symbol));
        }

        BudgetCommands::Show { budget } => {
            let id = service.resolve_id(&budget)?;
            let detail = service.detail(id)?;
            let date_format = &client.settings().date_format;
            print!("{}", format_budget_detail(&detail, symbol, date_format));
        }

        BudgetCommands::Create {
            month,
            no_recurring,
        } => {
            let (year, month) = match month {
                Some(month) => parse_month(&month)?,
                None => {
                    let today = Utc::now().date_naive();
                    (today.year(), today.month())
                }
            };

            let budget = service.create(year, month, !no_recurring)?;

            println!("Created budget: {}", budget.title());
            if budget.has_items() {
                println!(
                    "  {} recurring expense(s), {} total",
                    budget.expenses.len(),
                    format_amount(budget.totals.expenses, symbol)
                );
            }
            println!("  ID: {}", budget.id);
        }

        BudgetCommands::Add {
            budget,
            kind,
            name,
            amount,
            account,
        } => {
            let id = service.resolve_id(&budget)?;
            let kind = LineItemKind::parse(&kind).ok_or_else(|| {
                BudgetbookError::Validation(format!(
                    "Invalid line item kind: '{}'. Valid kinds: income, expense, savings",
                    kind
                ))
            })?;
            let amount = parse_amount(&amount)?;
            let account_id = match account {
                Some(account) => Some(AccountService::new(client).find(&account)?.id),
                None => None,
            };

            let updated = service.add_line_item(id, kind, &name, amount, account_id)?;

            println!(
                "Added {} '{}' ({}) to {}",
                kind.to_string().to_lowercase(),
                name.trim(),
                format_amount(amount, symbol),
                updated.title()
            );
            println!("  Balance: {}", format_amount(updated.totals.balance, symbol));
        }

        BudgetCommands::Lock { budget } => {
            let id = service.resolve_id(&budget)?;
            let locked = service.lock(id)?;
            println!("Locked budget: {}", locked.title());
            println!("Run 'budgetbook todo list {}' to see what is left to do.", locked.id);
        }

        BudgetCommands::Unlock { budget } => {
            let id = service.resolve_id(&budget)?;
            let unlocked = service.unlock(id)?;
            println!("Unlocked budget: {}", unlocked.title());
        }
    }

    Ok(())
}

/// Parse a `YYYY-MM` month
fn parse_month(s: &str) -> BudgetbookResult<(i32, u32)> {
    let invalid = || {
        BudgetbookError::Validation(format!("Invalid month: '{}'. Use the format YYYY-MM", s))
    };

    let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}
