//! Budget service
//!
//! Assembles what the budget list and detail views render: the budget
//! itself, its todo list query, and the lifecycle stage derived from both.
//! Also carries the draft editing and lock/unlock actions.

use crate::audit::{AuditEntry, EntityType, Operation};
use crate::client::BudgetClient;
use crate::error::{BudgetbookError, BudgetbookResult};
use crate::lifecycle::{
    derive_card_lifecycle_state, derive_detail_lifecycle_state, CardLifecycleState,
    DetailLifecycleState,
};
use crate::models::{
    AccountId, Budget, BudgetId, LineItem, LineItemKind, TodoList, TodoListSummary,
};
use crate::query::{QueryKey, QueryOptions, QueryState};

/// A budget as shown in the budgets list
#[derive(Debug, Clone)]
pub struct BudgetCard {
    pub budget: Budget,
    /// `None` while the todo summary of a locked budget is loading
    pub state: Option<CardLifecycleState>,
}

/// A budget as shown on its detail page
#[derive(Debug, Clone)]
pub struct BudgetDetail {
    pub budget: Budget,
    pub todo: QueryState<TodoList>,
    /// `None` while the todo summary of a locked budget is loading
    pub state: Option<DetailLifecycleState>,
}

impl BudgetDetail {
    pub fn todo_summary(&self) -> Option<TodoListSummary> {
        self.todo.data.as_ref().map(TodoList::summary)
    }
}

/// Service for budget views and budget actions
pub struct BudgetService<'a> {
    client: &'a BudgetClient,
}

impl<'a> BudgetService<'a> {
    pub fn new(client: &'a BudgetClient) -> Self {
        Self { client }
    }

    /// All budgets, newest first
    pub fn list(&self) -> BudgetbookResult<Vec<Budget>> {
        let api = self.client.api();
        let state = self
            .client
            .cache()
            .fetch(QueryKey::Budgets, QueryOptions::default(), || api.list_budgets());
        into_result(state)
    }

    /// Fetch one budget
    pub fn get(&self, id: BudgetId) -> BudgetbookResult<Budget> {
        let api = self.client.api();
        let state = self
            .client
            .cache()
            .fetch(QueryKey::Budget(id), QueryOptions::default(), || api.get_budget(id));
        into_result(state)
    }

    /// Todo list query of a budget; only runs once the budget is locked
    pub fn todo_query(&self, budget: &Budget) -> QueryState<TodoList> {
        let api = self.client.api();
        let options = QueryOptions::default()
            .enabled(budget.is_locked())
            .stale_after(self.client.settings().todo_stale_after());

        self.client
            .cache()
            .fetch(QueryKey::TodoList(budget.id), options, || api.get_todo_list(budget.id))
    }

    /// Cards for the budgets list
    ///
    /// A failing todo fetch degrades that card to its error stage instead
    /// of failing the list.
    pub fn list_cards(&self) -> BudgetbookResult<Vec<BudgetCard>> {
        let budgets = self.list()?;

        Ok(budgets
            .into_iter()
            .map(|budget| {
                let todo = self.todo_query(&budget);
                let summary = todo.data.as_ref().map(TodoList::summary);
                let state = derive_card_lifecycle_state(
                    &budget.totals,
                    budget.is_locked(),
                    summary.as_ref(),
                    todo.is_error,
                );
                BudgetCard { budget, state }
            })
            .collect())
    }

    /// Everything the detail page of a budget needs
    pub fn detail(&self, id: BudgetId) -> BudgetbookResult<BudgetDetail> {
        let budget = self.get(id)?;
        let todo = self.todo_query(&budget);
        let summary = todo.data.as_ref().map(TodoList::summary);

        let state = derive_detail_lifecycle_state(
            &budget.totals,
            budget.is_locked(),
            budget.has_items(),
            summary.as_ref(),
            todo.is_error,
        );

        tracing::debug!(
            budget = %budget.id,
            stage = state.as_ref().map_or("loading", DetailLifecycleState::kind),
            "derived budget detail"
        );

        Ok(BudgetDetail {
            budget,
            todo,
            state,
        })
    }

    /// Resolve a full or short budget id
    pub fn resolve_id(&self, s: &str) -> BudgetbookResult<BudgetId> {
        if let Ok(id) = s.parse::<BudgetId>() {
            return Ok(id);
        }

        let matches: Vec<_> = self
            .list()?
            .into_iter()
            .filter(|b| b.id.matches_short(s))
            .collect();

        match matches.as_slice() {
            [budget] => Ok(budget.id),
            [] => Err(BudgetbookError::budget_not_found(s)),
            _ => Err(BudgetbookError::Validation(format!(
                "Budget id '{}' is ambiguous ({} matches)",
                s,
                matches.len()
            ))),
        }
    }

    /// Create a draft budget, optionally pre-filled from the active
    /// recurring expense templates
    pub fn create(&self, year: i32, month: u32, with_recurring: bool) -> BudgetbookResult<Budget> {
        let api = self.client.api();
        let mut budget = api.create_budget(year, month)?;

        // The budget exists from here on, even if copying templates fails
        self.client.cache().invalidate_budget(budget.id)?;
        self.client.record(&AuditEntry::create(
            EntityType::Budget,
            budget.id.to_string(),
            Some(budget.title()),
            &budget,
        ))?;
        tracing::info!(budget = %budget.id, title = %budget.title(), "budget created");

        if with_recurring {
            for expense in api.list_recurring_expenses()?.into_iter().filter(|e| e.active) {
                let mut item = LineItem::new(expense.name.clone(), expense.amount);
                item.account_id = expense.account_id;
                item.recurring_expense_id = Some(expense.id);
                budget = api.add_line_item(budget.id, LineItemKind::Expense, item)?;
            }
            self.client.cache().invalidate_budget(budget.id)?;
        }

        Ok(budget)
    }

    /// Add a line item to a draft budget
    pub fn add_line_item(
        &self,
        id: BudgetId,
        kind: LineItemKind,
        name: &str,
        amount: f64,
        account_id: Option<AccountId>,
    ) -> BudgetbookResult<Budget> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BudgetbookError::Validation(
                "Line item name cannot be empty".into(),
            ));
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(BudgetbookError::Validation(format!(
                "Line item amount must be a non-negative number, got {}",
                amount
            )));
        }

        let budget = self.get(id)?;
        if budget.is_locked() {
            return Err(BudgetbookError::Budget(format!(
                "{} is locked; unlock it before editing",
                budget.title()
            )));
        }

        let mut item = LineItem::new(name, amount);
        item.account_id = account_id;
        let item_id = item.id;
        let budget = self.client.api().add_line_item(id, kind, item)?;
        self.client.cache().invalidate_budget(id)?;

        self.client.record(&AuditEntry::record(
            Operation::Create,
            EntityType::LineItem,
            item_id.to_string(),
            Some(name.to_string()),
            &budget.totals,
            Some(format!("{} line added to {}", kind, budget.title())),
        ))?;

        Ok(budget)
    }

    /// Lock a draft budget
    pub fn lock(&self, id: BudgetId) -> BudgetbookResult<Budget> {
        let budget = self.client.api().lock_budget(id)?;
        self.client.cache().invalidate_budget(id)?;

        self.client.record(&AuditEntry::record(
            Operation::Lock,
            EntityType::Budget,
            id.to_string(),
            Some(budget.title()),
            &budget,
            Some("status: DRAFT -> LOCKED".into()),
        ))?;

        tracing::info!(budget = %id, "budget locked");
        Ok(budget)
    }

    /// Return a locked budget to draft
    pub fn unlock(&self, id: BudgetId) -> BudgetbookResult<Budget> {
        let budget = self.client.api().unlock_budget(id)?;
        self.client.cache().invalidate_budget(id)?;

        self.client.record(&AuditEntry::record(
            Operation::Unlock,
            EntityType::Budget,
            id.to_string(),
            Some(budget.title()),
            &budget,
            Some("status: LOCKED -> DRAFT".into()),
        ))?;

        tracing::info!(budget = %id, "budget unlocked");
        Ok(budget)
    }
}

/// Turn a query state into a result for callers that need the data
pub(crate) fn into_result<T>(state: QueryState<T>) -> BudgetbookResult<T> {
    match state {
        QueryState {
            is_error: true,
            error,
            ..
        } => Err(BudgetbookError::Api(
            error.unwrap_or_else(|| "request failed".into()),
        )),
        QueryState { data: Some(data), .. } => Ok(data),
        QueryState { data: None, .. } => {
            Err(BudgetbookError::Api("query returned no data".into()))
        }
    }
}
