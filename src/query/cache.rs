//! In-memory query cache
//!
//! Responses are stored as JSON values keyed by [`QueryKey`], so one cache
//! holds every response type. Reads honour a per-query staleness window;
//! mutations can be applied optimistically and rolled back.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Duration, Utc};
use serde::{de::DeserializeOwned, Serialize};

use super::key::QueryKey;
use super::state::QueryState;
use crate::error::{BudgetbookError, BudgetbookResult};
use crate::models::BudgetId;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: serde_json::Value,
    fetched_at: DateTime<Utc>,
}

/// Per-fetch options
#[derive(Debug, Clone, Copy)]
pub struct QueryOptions {
    /// Disabled queries never call the fetcher
    pub enabled: bool,
    /// Cached data younger than this is served without refetching
    pub stale_after: Duration,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            stale_after: Duration::zero(),
        }
    }
}

impl QueryOptions {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn stale_after(mut self, stale_after: Duration) -> Self {
        self.stale_after = stale_after;
        self
    }
}

/// Cache of API responses shared by all services of a client
#[derive(Default)]
pub struct QueryCache {
    entries: RwLock<HashMap<QueryKey, CacheEntry>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch through the cache
    ///
    /// Fetch errors are reported in the returned state rather than as an
    /// `Err`; any previously cached data is kept alongside the error.
    pub fn fetch<T, F>(&self, key: QueryKey, options: QueryOptions, fetcher: F) -> QueryState<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> BudgetbookResult<T>,
    {
        let cached = self.cached::<T>(key);

        if !options.enabled {
            return QueryState {
                data: cached.map(|(data, _)| data),
                ..QueryState::idle()
            };
        }

        let previous = match cached {
            Some((data, fetched_at)) if Utc::now() - fetched_at < options.stale_after => {
                tracing::trace!(%key, "query served from cache");
                return QueryState::success(data);
            }
            Some((data, _)) => Some(data),
            None => None,
        };

        match fetcher() {
            Ok(data) => {
                if let Err(e) = self.store(key, &data, Utc::now()) {
                    tracing::warn!(%key, error = %e, "failed to cache query result");
                }
                QueryState::success(data)
            }
            Err(e) => {
                tracing::warn!(%key, error = %e, "query failed");
                QueryState::failure(previous, e.to_string())
            }
        }
    }

    /// Current cached value, without fetching
    pub fn peek<T: DeserializeOwned>(&self, key: QueryKey) -> Option<T> {
        self.cached(key).map(|(data, _)| data)
    }

    /// Apply `updater` to the cached value, then run `commit`
    ///
    /// If `commit` fails the cached value is restored and the error
    /// returned. On success the key is invalidated so the next read picks
    /// up the server's version. With nothing cached only `commit` runs.
    pub fn mutate<T, R, U, C>(&self, key: QueryKey, updater: U, commit: C) -> BudgetbookResult<R>
    where
        T: Serialize + DeserializeOwned,
        U: FnOnce(&mut T),
        C: FnOnce() -> BudgetbookResult<R>,
    {
        let snapshot = self.read()?.get(&key).cloned();

        if let Some(entry) = &snapshot {
            let mut value: T = serde_json::from_value(entry.value.clone())?;
            updater(&mut value);
            self.store(key, &value, entry.fetched_at)?;
            tracing::debug!(%key, "optimistic update applied");
        }

        match commit() {
            Ok(result) => {
                self.invalidate(key)?;
                Ok(result)
            }
            Err(e) => {
                let mut entries = self.write()?;
                match snapshot {
                    Some(entry) => {
                        entries.insert(key, entry);
                    }
                    None => {
                        entries.remove(&key);
                    }
                }
                tracing::warn!(%key, error = %e, "mutation failed, optimistic update rolled back");
                Err(e)
            }
        }
    }

    /// Drop one cached response
    pub fn invalidate(&self, key: QueryKey) -> BudgetbookResult<()> {
        self.write()?.remove(&key);
        Ok(())
    }

    /// Drop everything derived from one budget, including the budgets list
    pub fn invalidate_budget(&self, id: BudgetId) -> BudgetbookResult<()> {
        self.write()?
            .retain(|key, _| *key != QueryKey::Budgets && key.budget_id() != Some(id));
        Ok(())
    }

    pub fn clear(&self) -> BudgetbookResult<()> {
        self.write()?.clear();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cached<T: DeserializeOwned>(&self, key: QueryKey) -> Option<(T, DateTime<Utc>)> {
        let entry = match self.read() {
            Ok(entries) => entries.get(&key).cloned()?,
            Err(e) => {
                tracing::warn!(%key, error = %e, "query cache unavailable");
                return None;
            }
        };

        match serde_json::from_value(entry.value) {
            Ok(data) => Some((data, entry.fetched_at)),
            Err(e) => {
                tracing::warn!(%key, error = %e, "discarding unreadable cache entry");
                None
            }
        }
    }

    fn store<T: Serialize>(
        &self,
        key: QueryKey,
        data: &T,
        fetched_at: DateTime<Utc>,
    ) -> BudgetbookResult<()> {
        let value = serde_json::to_value(data)?;
        self.write()?.insert(key, CacheEntry { value, fetched_at });
        Ok(())
    }

    fn read(&self) -> BudgetbookResult<RwLockReadGuard<'_, HashMap<QueryKey, CacheEntry>>> {
        self.entries
            .read()
            .map_err(|e| BudgetbookError::Cache(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> BudgetbookResult<RwLockWriteGuard<'_, HashMap<QueryKey, CacheEntry>>> {
        self.entries
            .write()
            .map_err(|e| BudgetbookError::Cache(format!("Failed to acquire write lock: {}", e)))
    }
}
