//! Recurring expense service

use crate::audit::{AuditEntry, EntityType};
use crate::client::BudgetClient;
use crate::error::{BudgetbookError, BudgetbookResult};
use crate::models::{AccountId, RecurringExpense};
use crate::query::{QueryKey, QueryOptions};

use super::budget::into_result;

/// Service for recurring expense templates
pub struct RecurringService<'a> {
    client: &'a BudgetClient,
}

impl<'a> RecurringService<'a> {
    pub fn new(client: &'a BudgetClient) -> Self {
        Self { client }
    }

    /// Create a template; `account_id` must name an existing account
    pub fn create(
        &self,
        name: &str,
        amount: f64,
        account_id: Option<AccountId>,
        is_manual: bool,
    ) -> BudgetbookResult<RecurringExpense> {
        let mut expense = RecurringExpense::new(name.trim(), amount);
        expense.account_id = account_id;
        expense.is_manual = is_manual;
        expense
            .validate()
            .map_err(|e| BudgetbookError::Validation(e.to_string()))?;

        let expense = self.client.api().create_recurring_expense(expense)?;
        self.client.cache().invalidate(QueryKey::RecurringExpenses)?;

        self.client.record(&AuditEntry::create(
            EntityType::RecurringExpense,
            expense.id.to_string(),
            Some(expense.name.clone()),
            &expense,
        ))?;

        Ok(expense)
    }

    /// All templates, by name
    pub fn list(&self) -> BudgetbookResult<Vec<RecurringExpense>> {
        let api = self.client.api();
        into_result(self.client.cache().fetch(
            QueryKey::RecurringExpenses,
            QueryOptions::default(),
            || api.list_recurring_expenses(),
        ))
    }

    /// Monthly total of the active templates
    pub fn monthly_total(&self) -> BudgetbookResult<f64> {
        Ok(self
            .list()?
            .iter()
            .filter(|e| e.active)
            .map(|e| e.amount)
            .sum())
    }
}
