//! Account service
//!
//! Listing and creation of accounts, with validation before anything is
//! sent to the API.

use crate::audit::{AuditEntry, EntityType};
use crate::client::BudgetClient;
use crate::error::{BudgetbookError, BudgetbookResult};
use crate::models::{Account, AccountId, AccountType};
use crate::query::{QueryKey, QueryOptions};

use super::budget::into_result;

/// Service for account management
pub struct AccountService<'a> {
    client: &'a BudgetClient,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(client: &'a BudgetClient) -> Self {
        Self { client }
    }

    /// Create a new account
    pub fn create(
        &self,
        name: &str,
        account_type: AccountType,
        balance: f64,
    ) -> BudgetbookResult<Account> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BudgetbookError::Validation(
                "Account name cannot be empty".into(),
            ));
        }

        let account = Account::with_balance(name, account_type, balance);
        account
            .validate()
            .map_err(|e| BudgetbookError::Validation(e.to_string()))?;

        let account = self.client.api().create_account(account)?;
        self.client.cache().invalidate(QueryKey::Accounts)?;

        self.client.record(&AuditEntry::create(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
            &account,
        ))?;

        Ok(account)
    }

    /// All active accounts, by name
    pub fn list(&self) -> BudgetbookResult<Vec<Account>> {
        let api = self.client.api();
        into_result(self.client.cache().fetch(
            QueryKey::Accounts,
            QueryOptions::default(),
            || api.list_accounts(),
        ))
    }

    /// Find an account by name (case-insensitive) or id
    pub fn find(&self, identifier: &str) -> BudgetbookResult<Account> {
        let accounts = self.list()?;

        if let Ok(id) = identifier.parse::<AccountId>() {
            if let Some(account) = accounts.iter().find(|a| a.id == id) {
                return Ok(account.clone());
            }
        }

        let lower = identifier.to_lowercase();
        if let Some(account) = accounts.iter().find(|a| a.name.to_lowercase() == lower) {
            return Ok(account.clone());
        }

        let mut by_short = accounts.into_iter().filter(|a| a.id.matches_short(identifier));
        match (by_short.next(), by_short.next()) {
            (Some(account), None) => Ok(account),
            (Some(_), Some(_)) => Err(BudgetbookError::Validation(format!(
                "Account id '{}' is ambiguous",
                identifier
            ))),
            _ => Err(BudgetbookError::account_not_found(identifier)),
        }
    }

    /// Sum of all active account balances
    pub fn total_balance(&self) -> BudgetbookResult<f64> {
        Ok(self.list()?.iter().map(|a| a.balance).sum())
    }
}
