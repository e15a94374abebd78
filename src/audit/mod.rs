//! Activity log for budgetbook
//!
//! Every client-side mutation (creating accounts or budgets, locking,
//! ticking off todo items) is appended to a line-delimited JSON journal.
//! Durable budget state lives on the server; this log only records what
//! this client asked it to do.
//!
//! ```rust,ignore
//! use budgetbook::audit::{AuditEntry, AuditLogger, EntityType, Operation};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::record(
//!     Operation::Lock,
//!     EntityType::Budget,
//!     budget.id.to_string(),
//!     Some(budget.title()),
//!     &budget,
//!     None,
//! ))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
