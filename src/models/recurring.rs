//! Recurring expense templates
//!
//! A recurring expense is copied into a budget's expense lines each month.
//! Manual templates (bills the user pays by hand) show up as payments on
//! the budget's todo list once it is locked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, RecurringExpenseId};

/// A recurring expense template
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringExpense {
    pub id: RecurringExpenseId,

    /// Display name (e.g., "Rent")
    pub name: String,

    /// Monthly amount
    pub amount: f64,

    /// Account the expense is paid from
    #[serde(default)]
    pub account_id: Option<AccountId>,

    /// Whether the payment has to be made by hand
    #[serde(default)]
    pub is_manual: bool,

    /// Inactive templates are skipped when a budget is built
    #[serde(default = "default_active")]
    pub active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl RecurringExpense {
    /// Create a new active template
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        let now = Utc::now();
        Self {
            id: RecurringExpenseId::new(),
            name: name.into(),
            amount,
            account_id: None,
            is_manual: false,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder-style setter for the paying account
    pub fn paid_from(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Builder-style setter marking the expense as paid by hand
    pub fn manual(mut self) -> Self {
        self.is_manual = true;
        self
    }

    /// Validate the template
    pub fn validate(&self) -> Result<(), RecurringValidationError> {
        if self.name.trim().is_empty() {
            return Err(RecurringValidationError::EmptyName);
        }

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(RecurringValidationError::NonPositiveAmount);
        }

        Ok(())
    }
}

impl fmt::Display for RecurringExpense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}/month)", self.name, self.amount)
    }
}

/// Validation errors for recurring expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurringValidationError {
    EmptyName,
    NonPositiveAmount,
}

impl fmt::Display for RecurringValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Recurring expense name cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Recurring expense amount must be positive"),
        }
    }
}

impl std::error::Error for RecurringValidationError {}
