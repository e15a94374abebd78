//! Client context shared by the services
//!
//! Bundles the API, the query cache, user settings and the activity log,
//! the way a session of the app holds them.

use crate::api::{BudgetApi, SnapshotApi};
use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{BudgetbookPaths, Settings};
use crate::error::BudgetbookResult;
use crate::query::QueryCache;

pub struct BudgetClient {
    api: Box<dyn BudgetApi>,
    cache: QueryCache,
    settings: Settings,
    audit: AuditLogger,
}

impl BudgetClient {
    /// Create a client over any API implementation
    pub fn new(api: Box<dyn BudgetApi>, settings: Settings, audit: AuditLogger) -> Self {
        Self {
            api,
            cache: QueryCache::new(),
            settings,
            audit,
        }
    }

    /// Open the client backed by the local snapshot under `paths`
    pub fn open_local(paths: &BudgetbookPaths, settings: Settings) -> BudgetbookResult<Self> {
        paths.ensure_directories()?;
        let api = SnapshotApi::open(paths.snapshot_file())?;
        tracing::info!(
            api = %settings.api_base_url,
            snapshot = %paths.snapshot_file().display(),
            "using local snapshot in place of the remote API"
        );
        Ok(Self::new(
            Box::new(api),
            settings,
            AuditLogger::new(paths.audit_log()),
        ))
    }

    pub fn api(&self) -> &dyn BudgetApi {
        self.api.as_ref()
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Append an entry to the activity log
    pub fn record(&self, entry: &AuditEntry) -> BudgetbookResult<()> {
        self.audit.log(entry)
    }
}
