//! File-backed stand-in for the budget API
//!
//! Holds one JSON snapshot of everything the API would serve. Mutations
//! apply the bookkeeping the API contract implies and are written back
//! atomically.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use super::BudgetApi;
use crate::error::{BudgetbookError, BudgetbookResult};
use crate::models::{
    Account, AccountType, Budget, BudgetId, LineItem, LineItemKind, RecurringExpense, TodoItem,
    TodoItemId, TodoList,
};
use crate::storage::{read_json, write_json_atomic};

/// Serialized snapshot contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotData {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub recurring_expenses: Vec<RecurringExpense>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub todo_lists: Vec<TodoList>,
}

impl SnapshotData {
    fn budget_mut(&mut self, id: BudgetId) -> BudgetbookResult<&mut Budget> {
        self.budgets
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| BudgetbookError::budget_not_found(id.to_string()))
    }

    fn todo_list_mut(&mut self, id: BudgetId) -> &mut TodoList {
        let index = match self.todo_lists.iter().position(|l| l.budget_id == id) {
            Some(index) => index,
            None => {
                self.todo_lists.push(TodoList::new(id));
                self.todo_lists.len() - 1
            }
        };
        &mut self.todo_lists[index]
    }

    /// Checklist for a budget that is being locked
    ///
    /// Expense lines from manual recurring templates become payments.
    /// Savings lines become transfers out of the first checking account
    /// into their own account, or the first savings-type account when
    /// they have none. Without a checking account they become payments.
    fn build_todo_list(&self, budget: &Budget) -> TodoList {
        let mut list = TodoList::new(budget.id);

        for item in &budget.expenses {
            let manual = item.recurring_expense_id.is_some_and(|rid| {
                self.recurring_expenses
                    .iter()
                    .any(|e| e.id == rid && e.is_manual)
            });
            if manual {
                list.items
                    .push(TodoItem::payment(budget.id, item.name.clone(), item.amount));
            }
        }

        let checking = self
            .accounts
            .iter()
            .find(|a| !a.archived && a.account_type == AccountType::Checking)
            .map(|a| a.id);

        let savings_target = self
            .accounts
            .iter()
            .find(|a| !a.archived && a.account_type.is_savings_target())
            .map(|a| a.id);

        for item in budget.savings.iter().filter(|i| i.amount > 0.0) {
            let Some(to) = item.account_id.or(savings_target) else {
                continue;
            };
            let todo = match checking {
                Some(from) if from != to => {
                    TodoItem::transfer(budget.id, item.name.clone(), item.amount, from, to)
                }
                _ => TodoItem::payment(budget.id, item.name.clone(), item.amount),
            };
            list.items.push(todo);
        }

        list
    }
}

/// Budget API served from a local snapshot file
pub struct SnapshotApi {
    path: PathBuf,
    data: RwLock<SnapshotData>,
}

impl SnapshotApi {
    /// Load the snapshot at `path`; a missing file starts empty
    pub fn open(path: PathBuf) -> BudgetbookResult<Self> {
        let data: SnapshotData = read_json(&path)?;
        tracing::debug!(
            path = %path.display(),
            budgets = data.budgets.len(),
            accounts = data.accounts.len(),
            "snapshot loaded"
        );
        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    /// Replace the todo list of a budget, as the server does when it
    /// regenerates the checklist
    pub fn put_todo_list(&self, list: TodoList) -> BudgetbookResult<()> {
        self.update(|data| {
            data.todo_lists.retain(|l| l.budget_id != list.budget_id);
            data.todo_lists.push(list);
            Ok(())
        })
    }

    fn read(&self) -> BudgetbookResult<RwLockReadGuard<'_, SnapshotData>> {
        self.data
            .read()
            .map_err(|e| BudgetbookError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> BudgetbookResult<RwLockWriteGuard<'_, SnapshotData>> {
        self.data
            .write()
            .map_err(|e| BudgetbookError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Apply a mutation and persist the snapshot; on error nothing is saved
    fn update<T>(
        &self,
        f: impl FnOnce(&mut SnapshotData) -> BudgetbookResult<T>,
    ) -> BudgetbookResult<T> {
        let mut data = self.write()?;
        let mut working = data.clone();
        let result = f(&mut working)?;
        write_json_atomic(&self.path, &working)?;
        *data = working;
        Ok(result)
    }
}

impl BudgetApi for SnapshotApi {
    fn list_accounts(&self) -> BudgetbookResult<Vec<Account>> {
        let mut accounts: Vec<_> = self
            .read()?
            .accounts
            .iter()
            .filter(|a| !a.archived)
            .cloned()
            .collect();
        accounts.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(accounts)
    }

    fn create_account(&self, account: Account) -> BudgetbookResult<Account> {
        self.update(|data| {
            let name = account.name.to_lowercase();
            if data.accounts.iter().any(|a| a.name.to_lowercase() == name) {
                return Err(BudgetbookError::Validation(format!(
                    "Account '{}' already exists",
                    account.name
                )));
            }
            data.accounts.push(account.clone());
            Ok(account)
        })
    }

    fn list_recurring_expenses(&self) -> BudgetbookResult<Vec<RecurringExpense>> {
        let mut expenses = self.read()?.recurring_expenses.clone();
        expenses.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(expenses)
    }

    fn create_recurring_expense(
        &self,
        expense: RecurringExpense,
    ) -> BudgetbookResult<RecurringExpense> {
        self.update(|data| {
            if let Some(account_id) = expense.account_id {
                if !data.accounts.iter().any(|a| a.id == account_id) {
                    return Err(BudgetbookError::account_not_found(account_id.to_string()));
                }
            }
            data.recurring_expenses.push(expense.clone());
            Ok(expense)
        })
    }

    fn list_budgets(&self) -> BudgetbookResult<Vec<Budget>> {
        let mut budgets = self.read()?.budgets.clone();
        budgets.sort_by(|a, b| (b.year, b.month).cmp(&(a.year, a.month)));
        Ok(budgets)
    }

    fn get_budget(&self, id: BudgetId) -> BudgetbookResult<Budget> {
        self.read()?
            .budgets
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| BudgetbookError::budget_not_found(id.to_string()))
    }

    fn create_budget(&self, year: i32, month: u32) -> BudgetbookResult<Budget> {
        let budget = Budget::new(year, month);
        budget
            .validate()
            .map_err(|e| BudgetbookError::Validation(e.to_string()))?;

        self.update(|data| {
            if data.budgets.iter().any(|b| b.year == year && b.month == month) {
                return Err(BudgetbookError::Validation(format!(
                    "A budget for {} already exists",
                    budget.title()
                )));
            }
            data.budgets.push(budget.clone());
            Ok(budget)
        })
    }

    fn add_line_item(
        &self,
        id: BudgetId,
        kind: LineItemKind,
        item: LineItem,
    ) -> BudgetbookResult<Budget> {
        self.update(|data| {
            let budget = data.budget_mut(id)?;
            budget
                .add_line_item(kind, item)
                .map_err(|e| BudgetbookError::Budget(e.to_string()))?;
            Ok(budget.clone())
        })
    }

    fn lock_budget(&self, id: BudgetId) -> BudgetbookResult<Budget> {
        self.update(|data| {
            let budget = data.budget_mut(id)?;
            budget
                .lock()
                .map_err(|e| BudgetbookError::Budget(e.to_string()))?;
            let budget = budget.clone();
            let list = data.build_todo_list(&budget);
            data.todo_lists.retain(|l| l.budget_id != id);
            data.todo_lists.push(list);
            Ok(budget)
        })
    }

    fn unlock_budget(&self, id: BudgetId) -> BudgetbookResult<Budget> {
        self.update(|data| {
            let budget = data.budget_mut(id)?;
            budget
                .unlock()
                .map_err(|e| BudgetbookError::Budget(e.to_string()))?;
            Ok(budget.clone())
        })
    }

    fn get_todo_list(&self, id: BudgetId) -> BudgetbookResult<TodoList> {
        let data = self.read()?;
        let budget = data
            .budgets
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| BudgetbookError::budget_not_found(id.to_string()))?;

        if !budget.is_locked() {
            return Err(BudgetbookError::Budget(format!(
                "{} is not locked and has no todo list",
                budget.title()
            )));
        }

        Ok(data
            .todo_lists
            .iter()
            .find(|l| l.budget_id == id)
            .cloned()
            .unwrap_or_else(|| TodoList::new(id)))
    }

    fn toggle_todo_item(&self, id: BudgetId, item_id: TodoItemId) -> BudgetbookResult<TodoItem> {
        self.update(|data| {
            if !data.budget_mut(id)?.is_locked() {
                return Err(BudgetbookError::Budget(
                    "Todo items can only be changed on a locked budget".into(),
                ));
            }
            let item = data
                .todo_list_mut(id)
                .get_mut(item_id)
                .ok_or_else(|| BudgetbookError::todo_item_not_found(item_id.to_string()))?;
            item.toggle();
            Ok(item.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetStatus, TodoItemKind};
    use tempfile::TempDir;

    fn open_api() -> (SnapshotApi, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let api = SnapshotApi::open(temp_dir.path().join("data").join("snapshot.json")).unwrap();
        (api, temp_dir)
    }

    #[test]
    fn test_empty_snapshot() {
        let (api, _temp) = open_api();
        assert!(api.list_budgets().unwrap().is_empty());
        assert!(api.list_accounts().unwrap().is_empty());
    }

    #[test]
    fn test_create_budget_persists() {
        let (api, temp) = open_api();
        let budget = api.create_budget(2026, 3).unwrap();

        let reopened =
            SnapshotApi::open(temp.path().join("data").join("snapshot.json")).unwrap();
        let loaded = reopened.get_budget(budget.id).unwrap();
        assert_eq!(loaded.title(), "March 2026");
        assert_eq!(loaded.status, BudgetStatus::Draft);
    }

    #[test]
    fn test_duplicate_month_rejected() {
        let (api, _temp) = open_api();
        api.create_budget(2026, 3).unwrap();
        let err = api.create_budget(2026, 3).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(api.list_budgets().unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_month_rejected() {
        let (api, _temp) = open_api();
        assert!(api.create_budget(2026, 0).unwrap_err().is_validation());
    }

    #[test]
    fn test_budgets_sorted_newest_first() {
        let (api, _temp) = open_api();
        api.create_budget(2025, 12).unwrap();
        api.create_budget(2026, 2).unwrap();
        api.create_budget(2026, 1).unwrap();

        let titles: Vec<_> = api.list_budgets().unwrap().iter().map(|b| b.title()).collect();
        assert_eq!(titles, vec!["February 2026", "January 2026", "December 2025"]);
    }

    #[test]
    fn test_add_line_item_and_lock() {
        let (api, _temp) = open_api();
        let budget = api.create_budget(2026, 3).unwrap();

        let updated = api
            .add_line_item(budget.id, LineItemKind::Income, LineItem::new("Salary", 4000.0))
            .unwrap();
        assert_eq!(updated.totals.balance, 4000.0);

        api.lock_budget(budget.id).unwrap();
        let err = api
            .add_line_item(budget.id, LineItemKind::Expense, LineItem::new("Rent", 1500.0))
            .unwrap_err();
        assert!(matches!(err, BudgetbookError::Budget(_)));
        assert_eq!(api.get_budget(budget.id).unwrap().expenses.len(), 0);
    }

    #[test]
    fn test_todo_list_requires_lock() {
        let (api, _temp) = open_api();
        let budget = api.create_budget(2026, 3).unwrap();

        assert!(matches!(
            api.get_todo_list(budget.id),
            Err(BudgetbookError::Budget(_))
        ));

        api.lock_budget(budget.id).unwrap();
        assert!(api.get_todo_list(budget.id).unwrap().items.is_empty());
    }

    #[test]
    fn test_toggle_todo_item() {
        let (api, _temp) = open_api();
        let budget = api.create_budget(2026, 3).unwrap();
        api.lock_budget(budget.id).unwrap();

        let mut list = TodoList::new(budget.id);
        let item = TodoItem::payment(budget.id, "Rent", 1500.0);
        let item_id = item.id;
        list.items.push(item);
        api.put_todo_list(list).unwrap();

        let toggled = api.toggle_todo_item(budget.id, item_id).unwrap();
        assert!(toggled.is_completed());
        assert_eq!(api.get_todo_list(budget.id).unwrap().summary().completed_items, 1);

        let err = api.toggle_todo_item(budget.id, TodoItemId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_unknown_budget() {
        let (api, _temp) = open_api();
        assert!(api.get_budget(BudgetId::new()).unwrap_err().is_not_found());
        assert!(api.lock_budget(BudgetId::new()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_duplicate_account_name() {
        let (api, _temp) = open_api();
        api.create_account(Account::new("Checking", AccountType::Checking))
            .unwrap();
        let err = api
            .create_account(Account::new("checking", AccountType::Savings))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_recurring_requires_known_account() {
        let (api, _temp) = open_api();
        let expense =
            RecurringExpense::new("Rent", 1500.0).paid_from(crate::models::AccountId::new());
        assert!(api.create_recurring_expense(expense).unwrap_err().is_not_found());
    }

    #[test]
    fn test_lock_builds_todo_list() {
        let (api, _temp) = open_api();
        let checking = api
            .create_account(Account::new("Checking", AccountType::Checking))
            .unwrap();
        let savings = api
            .create_account(Account::new("Rainy day", AccountType::Savings))
            .unwrap();
        let rent = api
            .create_recurring_expense(RecurringExpense::new("Rent", 1500.0).manual())
            .unwrap();
        let phone = api
            .create_recurring_expense(RecurringExpense::new("Phone", 40.0))
            .unwrap();

        let budget = api.create_budget(2026, 3).unwrap();
        for expense in [&rent, &phone] {
            let mut item = LineItem::new(expense.name.clone(), expense.amount);
            item.recurring_expense_id = Some(expense.id);
            api.add_line_item(budget.id, LineItemKind::Expense, item).unwrap();
        }
        let mut saving = LineItem::new("Rainy day", 300.0);
        saving.account_id = Some(savings.id);
        api.add_line_item(budget.id, LineItemKind::Savings, saving).unwrap();

        api.lock_budget(budget.id).unwrap();
        let list = api.get_todo_list(budget.id).unwrap();

        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].name, "Rent");
        assert_eq!(list.items[0].kind, TodoItemKind::Payment);
        assert_eq!(list.items[1].kind, TodoItemKind::Transfer);
        assert_eq!(list.items[1].from_account_id, Some(checking.id));
        assert_eq!(list.items[1].to_account_id, Some(savings.id));
    }

    #[test]
    fn test_relock_rebuilds_todo_list() {
        let (api, _temp) = open_api();
        let rent = api
            .create_recurring_expense(RecurringExpense::new("Rent", 1500.0).manual())
            .unwrap();
        let budget = api.create_budget(2026, 4).unwrap();
        let mut item = LineItem::new("Rent", 1500.0);
        item.recurring_expense_id = Some(rent.id);
        api.add_line_item(budget.id, LineItemKind::Expense, item).unwrap();

        api.lock_budget(budget.id).unwrap();
        let item_id = api.get_todo_list(budget.id).unwrap().items[0].id;
        api.toggle_todo_item(budget.id, item_id).unwrap();

        api.unlock_budget(budget.id).unwrap();
        api.lock_budget(budget.id).unwrap();
        let summary = api.get_todo_list(budget.id).unwrap().summary();
        assert_eq!((summary.completed_items, summary.total_items), (0, 1));
    }

    #[test]
    fn test_unassigned_savings_go_to_savings_account() {
        let (api, _temp) = open_api();
        let checking = api
            .create_account(Account::new("Checking", AccountType::Checking))
            .unwrap();
        let brokerage = api
            .create_account(Account::new("Brokerage", AccountType::Investment))
            .unwrap();

        let budget = api.create_budget(2026, 5).unwrap();
        api.add_line_item(budget.id, LineItemKind::Savings, LineItem::new("Index fund", 500.0))
            .unwrap();
        api.lock_budget(budget.id).unwrap();

        let list = api.get_todo_list(budget.id).unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].from_account_id, Some(checking.id));
        assert_eq!(list.items[0].to_account_id, Some(brokerage.id));
    }
}
