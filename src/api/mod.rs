//! Budget API boundary
//!
//! The remote REST API owns every balance, budget and todo list. The rest
//! of the crate talks to it only through [`BudgetApi`], so a network client
//! and the local [`SnapshotApi`] are interchangeable.

mod snapshot;

pub use snapshot::{SnapshotApi, SnapshotData};

use crate::error::BudgetbookResult;
use crate::models::{
    Account, Budget, BudgetId, LineItem, LineItemKind, RecurringExpense, TodoItem, TodoItemId,
    TodoList,
};

/// Operations exposed by the budget API
pub trait BudgetApi {
    fn list_accounts(&self) -> BudgetbookResult<Vec<Account>>;

    fn create_account(&self, account: Account) -> BudgetbookResult<Account>;

    fn list_recurring_expenses(&self) -> BudgetbookResult<Vec<RecurringExpense>>;

    fn create_recurring_expense(
        &self,
        expense: RecurringExpense,
    ) -> BudgetbookResult<RecurringExpense>;

    /// All budgets, newest month first
    fn list_budgets(&self) -> BudgetbookResult<Vec<Budget>>;

    fn get_budget(&self, id: BudgetId) -> BudgetbookResult<Budget>;

    /// Create an empty draft budget for a month
    fn create_budget(&self, year: i32, month: u32) -> BudgetbookResult<Budget>;

    /// Append a line item to a draft budget, returning the updated budget
    fn add_line_item(
        &self,
        id: BudgetId,
        kind: LineItemKind,
        item: LineItem,
    ) -> BudgetbookResult<Budget>;

    fn lock_budget(&self, id: BudgetId) -> BudgetbookResult<Budget>;

    fn unlock_budget(&self, id: BudgetId) -> BudgetbookResult<Budget>;

    /// Todo list of a locked budget
    fn get_todo_list(&self, id: BudgetId) -> BudgetbookResult<TodoList>;

    /// Flip a todo item between pending and completed
    fn toggle_todo_item(&self, id: BudgetId, item_id: TodoItemId) -> BudgetbookResult<TodoItem>;
}
