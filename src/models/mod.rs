//! Core data models for budgetbook
//!
//! These mirror the shapes served by the budget API: accounts, recurring
//! expense templates, monthly budgets and their post-lock todo lists.

pub mod account;
pub mod budget;
pub mod ids;
pub mod recurring;
pub mod todo;

pub use account::{Account, AccountType};
pub use budget::{Budget, BudgetStatus, BudgetTotals, LineItem, LineItemKind};
pub use ids::{AccountId, BudgetId, LineItemId, RecurringExpenseId, TodoItemId};
pub use recurring::RecurringExpense;
pub use todo::{TodoItem, TodoItemKind, TodoItemStatus, TodoList, TodoListSummary};
