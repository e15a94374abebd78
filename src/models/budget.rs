//! Monthly budget model
//!
//! A budget is a month's plan of income, expense and savings line items.
//! While it is a draft it can be edited freely; locking it freezes the
//! line items and makes the server generate a todo list of manual payments
//! and transfers.

use chrono::{DateTime, Month, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, BudgetId, LineItemId, RecurringExpenseId};

/// Lock status of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetStatus {
    /// Still editable
    #[default]
    Draft,
    /// Line items are frozen and the todo list is active
    Locked,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "Draft"),
            Self::Locked => write!(f, "Locked"),
        }
    }
}

/// Which section of the budget a line item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineItemKind {
    Income,
    Expense,
    Savings,
}

impl LineItemKind {
    /// Parse a line item kind from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" | "in" => Some(Self::Income),
            "expense" | "expenses" | "out" => Some(Self::Expense),
            "savings" | "saving" | "save" => Some(Self::Savings),
            _ => None,
        }
    }
}

impl fmt::Display for LineItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::Savings => write!(f, "Savings"),
        }
    }
}

/// One income, expense or savings entry of a budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: LineItemId,
    pub name: String,
    pub amount: f64,

    /// Account the money comes from or goes to
    #[serde(default)]
    pub account_id: Option<AccountId>,

    /// Template this line was copied from, if any
    #[serde(default)]
    pub recurring_expense_id: Option<RecurringExpenseId>,
}

impl LineItem {
    /// Create a new line item
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: LineItemId::new(),
            name: name.into(),
            amount,
            account_id: None,
            recurring_expense_id: None,
        }
    }
}

/// Aggregated totals of a budget, as reported by the API
///
/// `balance` is taken as given. Callers that build totals themselves use
/// [`BudgetTotals::from_amounts`], which computes it as
/// `income - expenses - savings`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BudgetTotals {
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub balance: f64,
}

impl BudgetTotals {
    /// Totals with every figure at zero
    pub const fn zero() -> Self {
        Self {
            income: 0.0,
            expenses: 0.0,
            savings: 0.0,
            balance: 0.0,
        }
    }

    /// Create totals from all four figures
    pub const fn new(income: f64, expenses: f64, savings: f64, balance: f64) -> Self {
        Self {
            income,
            expenses,
            savings,
            balance,
        }
    }

    /// Create totals and derive the balance from the other three figures
    pub fn from_amounts(income: f64, expenses: f64, savings: f64) -> Self {
        Self::new(income, expenses, savings, income - expenses - savings)
    }
}

/// A monthly budget
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: BudgetId,
    pub year: i32,

    /// Calendar month, 1-12
    pub month: u32,

    #[serde(default)]
    pub status: BudgetStatus,

    #[serde(default)]
    pub income: Vec<LineItem>,

    #[serde(default)]
    pub expenses: Vec<LineItem>,

    #[serde(default)]
    pub savings: Vec<LineItem>,

    #[serde(default)]
    pub totals: BudgetTotals,

    #[serde(default)]
    pub locked_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new, empty draft budget for a month
    pub fn new(year: i32, month: u32) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            year,
            month,
            status: BudgetStatus::Draft,
            income: Vec::new(),
            expenses: Vec::new(),
            savings: Vec::new(),
            totals: BudgetTotals::zero(),
            locked_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the budget is locked
    pub fn is_locked(&self) -> bool {
        self.status == BudgetStatus::Locked
    }

    /// Whether the budget has any line items at all
    pub fn has_items(&self) -> bool {
        self.income.len() + self.expenses.len() + self.savings.len() > 0
    }

    /// Line items of one section
    pub fn items(&self, kind: LineItemKind) -> &[LineItem] {
        match kind {
            LineItemKind::Income => &self.income,
            LineItemKind::Expense => &self.expenses,
            LineItemKind::Savings => &self.savings,
        }
    }

    /// Human readable month, e.g. "January 2026"
    pub fn title(&self) -> String {
        match u8::try_from(self.month).ok().and_then(|m| Month::try_from(m).ok()) {
            Some(month) => format!("{} {}", month.name(), self.year),
            None => format!("{}-{:02}", self.year, self.month),
        }
    }

    /// Append a line item to a draft budget and refresh the totals
    pub fn add_line_item(
        &mut self,
        kind: LineItemKind,
        item: LineItem,
    ) -> Result<(), BudgetValidationError> {
        if self.is_locked() {
            return Err(BudgetValidationError::Locked);
        }
        if !item.amount.is_finite() || item.amount < 0.0 {
            return Err(BudgetValidationError::NegativeAmount(item.name));
        }

        match kind {
            LineItemKind::Income => self.income.push(item),
            LineItemKind::Expense => self.expenses.push(item),
            LineItemKind::Savings => self.savings.push(item),
        }
        self.recalculate_totals();
        Ok(())
    }

    /// Recompute totals from the line items
    pub fn recalculate_totals(&mut self) {
        let sum = |items: &[LineItem]| items.iter().map(|i| i.amount).sum::<f64>();
        self.totals = BudgetTotals::from_amounts(
            sum(&self.income),
            sum(&self.expenses),
            sum(&self.savings),
        );
        self.updated_at = Utc::now();
    }

    /// Freeze the line items
    pub fn lock(&mut self) -> Result<(), BudgetValidationError> {
        if self.is_locked() {
            return Err(BudgetValidationError::AlreadyLocked);
        }
        let now = Utc::now();
        self.status = BudgetStatus::Locked;
        self.locked_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    /// Return the budget to draft
    pub fn unlock(&mut self) -> Result<(), BudgetValidationError> {
        if !self.is_locked() {
            return Err(BudgetValidationError::NotLocked);
        }
        self.status = BudgetStatus::Draft;
        self.locked_at = None;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !(1..=12).contains(&self.month) {
            return Err(BudgetValidationError::InvalidMonth(self.month));
        }

        let all = self.income.iter().chain(&self.expenses).chain(&self.savings);
        for item in all {
            if !item.amount.is_finite() || item.amount < 0.0 {
                return Err(BudgetValidationError::NegativeAmount(item.name.clone()));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title(), self.status)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    InvalidMonth(u32),
    NegativeAmount(String),
    Locked,
    AlreadyLocked,
    NotLocked,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "Invalid month {} (expected 1-12)", m),
            Self::NegativeAmount(name) => {
                write!(f, "Line item '{}' must have a non-negative amount", name)
            }
            Self::Locked => write!(f, "Budget is locked; unlock it before editing"),
            Self::AlreadyLocked => write!(f, "Budget is already locked"),
            Self::NotLocked => write!(f, "Budget is not locked"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget_is_empty_draft() {
        let budget = Budget::new(2026, 1);
        assert!(!budget.is_locked());
        assert!(!budget.has_items());
        assert_eq!(budget.totals, BudgetTotals::zero());
        assert_eq!(budget.title(), "January 2026");
    }

    #[test]
    fn test_add_line_items_updates_totals() {
        let mut budget = Budget::new(2026, 3);
        budget
            .add_line_item(LineItemKind::Income, LineItem::new("Salary", 50000.0))
            .unwrap();
        budget
            .add_line_item(LineItemKind::Expense, LineItem::new("Rent", 30000.0))
            .unwrap();
        budget
            .add_line_item(LineItemKind::Savings, LineItem::new("Emergency", 10000.0))
            .unwrap();

        assert!(budget.has_items());
        assert_eq!(budget.totals, BudgetTotals::new(50000.0, 30000.0, 10000.0, 10000.0));
        assert_eq!(budget.items(LineItemKind::Expense).len(), 1);
    }

    #[test]
    fn test_locked_budget_rejects_edits() {
        let mut budget = Budget::new(2026, 3);
        budget.lock().unwrap();
        assert!(budget.locked_at.is_some());

        let result = budget.add_line_item(LineItemKind::Income, LineItem::new("Bonus", 10.0));
        assert_eq!(result, Err(BudgetValidationError::Locked));
        assert_eq!(budget.lock(), Err(BudgetValidationError::AlreadyLocked));

        budget.unlock().unwrap();
        assert!(budget.locked_at.is_none());
        assert_eq!(budget.unlock(), Err(BudgetValidationError::NotLocked));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut budget = Budget::new(2026, 3);
        let result = budget.add_line_item(LineItemKind::Expense, LineItem::new("Refund", -5.0));
        assert_eq!(
            result,
            Err(BudgetValidationError::NegativeAmount("Refund".into()))
        );
        assert!(!budget.has_items());
    }

    #[test]
    fn test_invalid_month() {
        let budget = Budget::new(2026, 13);
        assert_eq!(budget.validate(), Err(BudgetValidationError::InvalidMonth(13)));
        assert_eq!(budget.title(), "2026-13");
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&BudgetStatus::Locked).unwrap(), "\"LOCKED\"");
        let status: BudgetStatus = serde_json::from_str("\"DRAFT\"").unwrap();
        assert_eq!(status, BudgetStatus::Draft);
    }

    #[test]
    fn test_line_item_kind_parse() {
        assert_eq!(LineItemKind::parse("Expenses"), Some(LineItemKind::Expense));
        assert_eq!(LineItemKind::parse("save"), Some(LineItemKind::Savings));
        assert_eq!(LineItemKind::parse("gift"), None);
    }
}
