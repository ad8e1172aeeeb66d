//! Split model
//!
//! The mapping from member name to that member's share of an expense.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Per-member shares of one expense
///
/// Serialized as a plain JSON object (`{"Alice": 20, "Bob": 20}`) in member
/// order, and stored data keeps its key order through a load and save.
/// Shares are expected to sum to the expense amount but this is not enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Split(IndexMap<String, Money>);

impl Split {
    /// Every member gets `amount / n`, regardless of who paid
    ///
    /// No remainder is redistributed, so shares of odd amounts may not sum
    /// exactly to `amount`. An empty member list yields an empty split.
    pub fn equal<S: AsRef<str>>(amount: Money, members: &[S]) -> Self {
        let share = amount.divide_evenly(members.len());
        Self(
            members
                .iter()
                .map(|member| (member.as_ref().to_string(), share))
                .collect(),
        )
    }

    /// Share owed by `member`, zero if they are not part of the split
    pub fn share_of(&self, member: &str) -> Money {
        self.0.get(member).copied().unwrap_or_default()
    }

    /// Sum of all shares
    pub fn total(&self) -> Money {
        self.0.values().sum()
    }

    /// Iterate over `(member, share)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.0.iter().map(|(member, share)| (member.as_str(), *share))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
