//! Group model
//!
//! A named set of members who share expenses. Member names are compared
//! case-sensitively, exactly as they were entered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GroupId;

/// A group of people sharing expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Unique identifier
    pub id: GroupId,

    /// Display name
    pub name: String,

    /// Member names, in the order they were added
    pub members: Vec<String>,

    /// When the group was created (milliseconds since epoch on disk)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGroup {
    pub name: String,
    pub members: Vec<String>,
}

impl NewGroup {
    pub fn new(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }
}

impl Group {
    /// Build a group with a fresh id and the current time
    pub fn new(data: NewGroup) -> Self {
        Self {
            id: GroupId::new(),
            name: data.name,
            members: data.members,
            created_at: Utc::now(),
        }
    }

    /// Check whether `name` is one of the members
    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    /// Number of members
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
