//! Todo list CLI commands

use clap::Subcommand;

use crate::client::BudgetClient;
use crate::display::{format_amount, format_todo_list};
use crate::error::BudgetbookResult;
use crate::services::{BudgetService, TodoService};

/// Todo subcommands
#[derive(Subcommand)]
pub enum TodoCommands {
    /// Show the todo list of a locked budget
    List {
        /// Budget ID
        budget: String,
    },

    /// Mark a todo item done, or pending again
    Toggle {
        /// Budget ID
        budget: String,
        /// Todo item ID (full or short, e.g. "todo-1a2b3c4d")
        item: String,
    },
}

/// Handle a todo command
pub fn handle_todo_command(client: &BudgetClient, cmd: TodoCommands) -> BudgetbookResult<()> {
    let budgets = BudgetService::new(client);
    let service = TodoService::new(client);
    let symbol = &client.settings().currency_symbol;

    match cmd {
        TodoCommands::List { budget } => {
            let id = budgets.resolve_id(&budget)?;
            let list = service.list(id)?;
            print!("{}", format_todo_list(&list, symbol));
        }

        TodoCommands::Toggle { budget, item } => {
            let id = budgets.resolve_id(&budget)?;
            let item_id = service.resolve_item_id(id, &item)?;
            let item = service.toggle(id, item_id)?;

            let status = if item.is_completed() { "Done" } else { "Pending" };
            println!(
                "{}: {} ({})",
                status,
                item.name,
                format_amount(item.amount, symbol)
            );
        }
    }

    Ok(())
}
