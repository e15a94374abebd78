//! Activity entry data structures
//!
//! Defines what a line of the activity log records: which client action was
//! taken, against which entity, and the entity's state afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client actions that are journaled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Lock,
    Unlock,
    /// Todo item marked done
    Complete,
    /// Todo item marked pending again
    Reopen,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Lock => write!(f, "LOCK"),
            Operation::Unlock => write!(f, "UNLOCK"),
            Operation::Complete => write!(f, "COMPLETE"),
            Operation::Reopen => write!(f, "REOPEN"),
        }
    }
}

/// Types of entities that can be journaled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Account,
    RecurringExpense,
    Budget,
    LineItem,
    TodoItem,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Account => write!(f, "Account"),
            EntityType::RecurringExpense => write!(f, "RecurringExpense"),
            EntityType::Budget => write!(f, "Budget"),
            EntityType::LineItem => write!(f, "LineItem"),
            EntityType::TodoItem => write!(f, "TodoItem"),
        }
    }
}

/// A single activity log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the action was taken (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// ID of the affected entity
    pub entity_id: String,

    /// Human-readable description of the entity (e.g., "March 2026")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// JSON representation of the entity after the action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Short description of what changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    /// Entry for a newly created entity
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self::record(Operation::Create, entity_type, entity_id, entity_name, entity, None)
    }

    /// Entry for any other action, carrying the entity's new state
    pub fn record<T: Serialize>(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
        summary: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            after: serde_json::to_value(entity).ok(),
            summary,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(summary) = &self.summary {
            output.push_str(&format!("\n  {}", summary));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Lock.to_string(), "LOCK");
        assert_eq!(Operation::Complete.to_string(), "COMPLETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(
            EntityType::Account,
            "acc-12345678",
            Some("Checking".to_string()),
            &json!({"name": "Checking"}),
        );

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Account);
        assert!(entry.after.is_some());
        assert!(entry.summary.is_none());
    }

    #[test]
    fn test_record_entry() {
        let entry = AuditEntry::record(
            Operation::Lock,
            EntityType::Budget,
            "bud-12345678",
            Some("March 2026".to_string()),
            &json!({"status": "LOCKED"}),
            Some("status: DRAFT -> LOCKED".to_string()),
        );

        assert_eq!(entry.operation, Operation::Lock);
        assert_eq!(entry.summary.as_deref(), Some("status: DRAFT -> LOCKED"));
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(EntityType::TodoItem, "todo-1", None, &json!({}));

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"todo_item\""));
        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.entity_type, EntityType::TodoItem);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::record(
            Operation::Complete,
            EntityType::TodoItem,
            "todo-12345678",
            Some("Rent".to_string()),
            &json!({}),
            Some("3/5 done".to_string()),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("COMPLETE TodoItem todo-12345678 (Rent)"));
        assert!(formatted.contains("3/5 done"));
    }
}
