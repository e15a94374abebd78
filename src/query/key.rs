use std::fmt;

use crate::models::BudgetId;

/// Identifies one cached API response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Accounts,
    RecurringExpenses,
    Budgets,
    Budget(BudgetId),
    TodoList(BudgetId),
}

impl QueryKey {
    /// Budget the key belongs to, if any
    pub fn budget_id(&self) -> Option<BudgetId> {
        match self {
            Self::Budget(id) | Self::TodoList(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accounts => write!(f, "accounts"),
            Self::RecurringExpenses => write!(f, "recurring-expenses"),
            Self::Budgets => write!(f, "budgets"),
            Self::Budget(id) => write!(f, "budgets/{}", id),
            Self::TodoList(id) => write!(f, "budgets/{}/todo", id),
        }
    }
}
