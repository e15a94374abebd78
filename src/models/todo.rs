//! Post-lock todo list
//!
//! When a budget is locked the server generates a checklist of the manual
//! payments and transfers the user still has to carry out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, BudgetId, TodoItemId};

/// What the user has to do for a todo item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoItemKind {
    /// Pay a bill by hand
    Payment,
    /// Move money between two accounts
    Transfer,
}

impl fmt::Display for TodoItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Payment => write!(f, "Payment"),
            Self::Transfer => write!(f, "Transfer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoItemStatus {
    #[default]
    Pending,
    Completed,
}

/// A single checklist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: TodoItemId,
    pub budget_id: BudgetId,

    #[serde(rename = "type")]
    pub kind: TodoItemKind,

    pub name: String,
    pub amount: f64,

    #[serde(default)]
    pub from_account_id: Option<AccountId>,

    /// Destination account, transfers only
    #[serde(default)]
    pub to_account_id: Option<AccountId>,

    #[serde(default)]
    pub status: TodoItemStatus,

    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl TodoItem {
    /// Create a pending payment
    pub fn payment(budget_id: BudgetId, name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: TodoItemId::new(),
            budget_id,
            kind: TodoItemKind::Payment,
            name: name.into(),
            amount,
            from_account_id: None,
            to_account_id: None,
            status: TodoItemStatus::Pending,
            completed_at: None,
        }
    }

    /// Create a pending transfer between two accounts
    pub fn transfer(
        budget_id: BudgetId,
        name: impl Into<String>,
        amount: f64,
        from: AccountId,
        to: AccountId,
    ) -> Self {
        Self {
            kind: TodoItemKind::Transfer,
            from_account_id: Some(from),
            to_account_id: Some(to),
            ..Self::payment(budget_id, name, amount)
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TodoItemStatus::Completed
    }

    /// Flip between pending and completed
    pub fn toggle(&mut self) {
        if self.is_completed() {
            self.status = TodoItemStatus::Pending;
            self.completed_at = None;
        } else {
            self.status = TodoItemStatus::Completed;
            self.completed_at = Some(Utc::now());
        }
    }
}

/// Counts of a todo list's items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TodoListSummary {
    pub total_items: u32,
    pub completed_items: u32,
    pub pending_items: u32,
}

impl TodoListSummary {
    pub const fn new(total_items: u32, completed_items: u32, pending_items: u32) -> Self {
        Self {
            total_items,
            completed_items,
            pending_items,
        }
    }

    /// Count the items of a list
    pub fn from_items(items: &[TodoItem]) -> Self {
        let completed = items.iter().filter(|i| i.is_completed()).count() as u32;
        let total = items.len() as u32;
        Self::new(total, completed, total - completed)
    }

    /// `completed + pending == total` and `completed <= total`
    pub fn is_consistent(&self) -> bool {
        self.completed_items <= self.total_items
            && self.completed_items.checked_add(self.pending_items) == Some(self.total_items)
    }
}

/// The todo list of a locked budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    pub budget_id: BudgetId,

    #[serde(default)]
    pub items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new(budget_id: BudgetId) -> Self {
        Self {
            budget_id,
            items: Vec::new(),
        }
    }

    pub fn summary(&self) -> TodoListSummary {
        TodoListSummary::from_items(&self.items)
    }

    pub fn get(&self, id: TodoItemId) -> Option<&TodoItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn get_mut(&mut self, id: TodoItemId) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }
}
