//! Expense model
//!
//! A single spend event attributed to a payer and divided among members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ExpenseId, GroupId};
use super::money::Money;
use super::split::Split;

/// A shared expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Owning group; not checked against existing groups
    pub group_id: GroupId,

    /// Short title
    pub title: String,

    /// Optional notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Total amount, any sign
    pub amount: Money,

    /// Member who paid
    pub paid_by: String,

    /// Each member's share of `amount`
    #[serde(default)]
    pub split_between: Split,

    /// Category label, normally one of [`super::ExpenseCategory`]
    pub category: String,

    /// When the expense was logged (milliseconds since epoch on disk)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new expense
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub group_id: GroupId,
    pub title: String,
    pub description: Option<String>,
    pub amount: Money,
    pub paid_by: String,
    pub split_between: Split,
    pub category: String,
}

impl Expense {
    /// Build an expense with a fresh id and the current time
    pub fn new(data: NewExpense) -> Self {
        Self {
            id: ExpenseId::new(),
            group_id: data.group_id,
            title: data.title,
            description: data.description,
            amount: data.amount,
            paid_by: data.paid_by,
            split_between: data.split_between,
            category: data.category,
            created_at: Utc::now(),
        }
    }

    /// Whether this expense belongs to `group_id`
    pub fn belongs_to(&self, group_id: &GroupId) -> bool {
        &self.group_id == group_id
    }

    /// Whether the payer's own share is positive
    pub fn payer_has_share(&self) -> bool {
        self.split_between.share_of(&self.paid_by).value() > 0.0
    }
}
