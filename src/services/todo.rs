//! Todo list service
//!
//! Reads the checklist of a locked budget and toggles its items. Toggles
//! are applied to the cached list first so the change shows immediately,
//! and rolled back if the API rejects them.

use crate::audit::{AuditEntry, EntityType, Operation};
use crate::client::BudgetClient;
use crate::error::{BudgetbookError, BudgetbookResult};
use crate::models::{BudgetId, TodoItem, TodoItemId, TodoList};
use crate::query::QueryKey;

use super::budget::{into_result, BudgetService};

/// Service for the todo list of locked budgets
pub struct TodoService<'a> {
    client: &'a BudgetClient,
}

impl<'a> TodoService<'a> {
    pub fn new(client: &'a BudgetClient) -> Self {
        Self { client }
    }

    /// Todo list of a budget; fails for draft budgets
    pub fn list(&self, budget_id: BudgetId) -> BudgetbookResult<TodoList> {
        let budgets = BudgetService::new(self.client);
        let budget = budgets.get(budget_id)?;
        if !budget.is_locked() {
            return Err(BudgetbookError::Budget(format!(
                "{} is a draft; lock it to get a todo list",
                budget.title()
            )));
        }

        into_result(budgets.todo_query(&budget))
    }

    /// Flip an item between pending and completed
    pub fn toggle(&self, budget_id: BudgetId, item_id: TodoItemId) -> BudgetbookResult<TodoItem> {
        let api = self.client.api();
        let cache = self.client.cache();

        let item = cache.mutate::<TodoList, _, _, _>(
            QueryKey::TodoList(budget_id),
            |list| {
                if let Some(item) = list.get_mut(item_id) {
                    item.toggle();
                }
            },
            || api.toggle_todo_item(budget_id, item_id),
        )?;

        // Card progress in the budgets list depends on the todo summary
        cache.invalidate(QueryKey::Budgets)?;

        let operation = if item.is_completed() {
            Operation::Complete
        } else {
            Operation::Reopen
        };
        self.client.record(&AuditEntry::record(
            operation,
            EntityType::TodoItem,
            item.id.to_string(),
            Some(item.name.clone()),
            &item,
            None,
        ))?;

        tracing::info!(budget = %budget_id, item = %item.id, %operation, "todo item toggled");
        Ok(item)
    }

    /// Resolve a full or short todo item id within a budget's list
    pub fn resolve_item_id(&self, budget_id: BudgetId, s: &str) -> BudgetbookResult<TodoItemId> {
        let list = self.list(budget_id)?;

        if let Ok(id) = s.parse::<TodoItemId>() {
            if list.get(id).is_some() {
                return Ok(id);
            }
        }

        let mut matches = list.items.iter().filter(|i| i.id.matches_short(s));
        match (matches.next(), matches.next()) {
            (Some(item), None) => Ok(item.id),
            (Some(_), Some(_)) => Err(BudgetbookError::Validation(format!(
                "Todo item id '{}' is ambiguous",
                s
            ))),
            _ => Err(BudgetbookError::todo_item_not_found(s)),
        }
    }
}
