//! Audit entry data structures
//!
//! Groups and expenses are create-only, so every entry records a creation
//! together with the JSON form of the new record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened to the entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
}

/// Kind of record an entry is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Group,
    Expense,
}

impl EntityType {
    fn noun(self) -> &'static str {
        match self {
            EntityType::Group => "group",
            EntityType::Expense => "expense",
        }
    }
}

/// One line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,
    pub entity_id: String,

    /// Group name or expense title at the time of the change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// The record as it was stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for a newly created record
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            after: serde_json::to_value(entity).ok(),
        }
    }

    /// One-line summary such as `2024-05-01 12:30  created expense "Dinner" (3f9a...)`
    ///
    /// `date_format` must already be a valid strftime string.
    pub fn describe(&self, date_format: &str) -> String {
        let verb = match self.operation {
            Operation::Create => "created",
        };
        let label = match &self.entity_name {
            Some(name) => format!(" \"{}\"", name),
            None => String::new(),
        };

        format!(
            "{} {}  {} {}{} ({})",
            self.timestamp.format(date_format),
            self.timestamp.format("%H:%M"),
            verb,
            self.entity_type.noun(),
            label,
            self.entity_id
        )
    }
}
