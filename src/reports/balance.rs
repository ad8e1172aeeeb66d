//! Group balances
//!
//! Two figures are derived per group. The total spend is the plain sum of
//! expense amounts. The net position of a member is what they paid minus
//! what they owe according to each expense's split:
//!
//! `net(member) = Σ amount where paid_by == member − Σ split_between[member]`
//!
//! A positive net position means the others owe that member money.

use std::collections::HashMap;
use std::fmt;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, Group, GroupId, Money};
use crate::storage::StoreState;

/// Sum of all expense amounts logged against `group_id`
pub fn group_total(expenses: &[Expense], group_id: &GroupId) -> Money {
    expenses
        .iter()
        .filter(|e| e.belongs_to(group_id))
        .map(|e| e.amount)
        .sum()
}

/// Whether a member is owed money, owes money, or is even
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    ToReceive,
    Owes,
    Settled,
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceStatus::ToReceive => write!(f, "To Receive"),
            BalanceStatus::Owes => write!(f, "Owes"),
            BalanceStatus::Settled => write!(f, "Settled"),
        }
    }
}

/// One person's position within a group
#[derive(Debug, Clone, PartialEq)]
pub struct MemberBalance {
    pub member: String,
    /// Total of expenses this person paid
    pub paid: Money,
    /// Total of this person's shares
    pub owed: Money,
    /// `paid - owed`
    pub net: Money,
    /// False for names that only appear on expenses, not in the member list
    pub is_member: bool,
}

impl MemberBalance {
    fn new(member: &str, is_member: bool) -> Self {
        Self {
            member: member.to_string(),
            paid: Money::zero(),
            owed: Money::zero(),
            net: Money::zero(),
            is_member,
        }
    }

    pub fn status(&self) -> BalanceStatus {
        if self.net.is_positive() {
            BalanceStatus::ToReceive
        } else if self.net.is_negative() {
            BalanceStatus::Owes
        } else {
            BalanceStatus::Settled
        }
    }
}

/// Net positions for `group`, computed from the expenses that belong to it
///
/// Members come first in group order. Payers or split participants who are
/// not (or no longer) members follow in the order they were first seen.
pub fn net_positions(group: &Group, expenses: &[Expense]) -> Vec<MemberBalance> {
    let mut balances: Vec<MemberBalance> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for member in &group.members {
        if !index.contains_key(member) {
            index.insert(member.clone(), balances.len());
            balances.push(MemberBalance::new(member, true));
        }
    }

    let mut slot = |name: &str, balances: &mut Vec<MemberBalance>| -> usize {
        if let Some(&i) = index.get(name) {
            return i;
        }
        index.insert(name.to_string(), balances.len());
        balances.push(MemberBalance::new(name, false));
        balances.len() - 1
    };

    for expense in expenses.iter().filter(|e| e.belongs_to(&group.id)) {
        let payer = slot(&expense.paid_by, &mut balances);
        balances[payer].paid += expense.amount;

        for (member, share) in expense.split_between.iter() {
            let i = slot(member, &mut balances);
            balances[i].owed += share;
        }
    }

    for balance in &mut balances {
        balance.net = balance.paid - balance.owed;
    }

    balances
}

/// Balance view of a single group
#[derive(Debug, Clone)]
pub struct GroupBalanceReport {
    pub group: Group,
    /// Sum of all expense amounts in the group
    pub total_spend: Money,
    pub expense_count: usize,
    pub members: Vec<MemberBalance>,
}

impl GroupBalanceReport {
    /// Generate the report for one group of a snapshot
    pub fn generate(state: &StoreState, group_id: &GroupId) -> LedgerResult<Self> {
        let group = state
            .groups
            .iter()
            .find(|g| &g.id == group_id)
            .ok_or_else(|| LedgerError::group_not_found(group_id.as_str()))?;

        Ok(Self::for_group(group, &state.expenses))
    }

    /// Build the report from a group and any list of expenses
    pub fn for_group(group: &Group, expenses: &[Expense]) -> Self {
        Self {
            group: group.clone(),
            total_spend: group_total(expenses, &group.id),
            expense_count: expenses.iter().filter(|e| e.belongs_to(&group.id)).count(),
            members: net_positions(group, expenses),
        }
    }

    /// Sum of all net positions; zero when every split matches its amount
    pub fn net_sum(&self) -> Money {
        self.members.iter().map(|m| m.net).sum()
    }

    /// Balance of one person, if they appear in the group
    pub fn member(&self, name: &str) -> Option<&MemberBalance> {
        self.members.iter().find(|m| m.member == name)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Balances: {}\n", self.group.name));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Spend: {} ({} expenses)\n\n",
            self.total_spend.format_with_symbol(currency),
            self.expense_count
        ));

        output.push_str(&format!(
            "{:<20} {:>10} {:>10} {:>10}  {}\n",
            "Member", "Paid", "Share", "Net", "Status"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for balance in &self.members {
            let name = if balance.is_member {
                balance.member.clone()
            } else {
                format!("{} (former)", balance.member)
            };
            output.push_str(&format!(
                "{:<20} {:>10} {:>10} {:>10}  {}\n",
                name,
                balance.paid.format_with_symbol(currency),
                balance.owed.format_with_symbol(currency),
                balance.net.format_with_symbol(currency),
                balance.status()
            ));
        }

        let drift = self.net_sum();
        if drift.rounded_cents() != 0 {
            output.push_str(&format!(
                "\nNote: shares and payments differ by {}\n",
                drift.format_with_symbol(currency)
            ));
        }

        output
    }
}
