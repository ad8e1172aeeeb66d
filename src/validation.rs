//! Input validation for new groups and expenses
//!
//! The store accepts whatever it is given. These checks run at the service
//! boundary, before an entity is constructed, and return a typed reason.

use thiserror::Error;

use crate::models::{ExpenseCategory, Group, Money};

/// Minimum number of members a new group needs
pub const MIN_GROUP_MEMBERS: usize = 2;

/// Why a piece of user input was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a group name")]
    EmptyGroupName,

    #[error("Please enter a member name")]
    EmptyMemberName,

    #[error("Member already exists: {0}")]
    DuplicateMember(String),

    #[error("Add at least 2 members to create a group")]
    TooFewMembers(usize),

    #[error("Please enter an expense title")]
    EmptyTitle,

    #[error("Please enter a valid amount")]
    InvalidAmount(String),

    #[error("Please select who paid")]
    MissingPayer,

    #[error("'{payer}' is not a member of group '{group}'")]
    PayerNotMember { payer: String, group: String },

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
}

/// Check a member name before adding it to a draft member list
pub fn validate_member_name(name: &str, existing: &[String]) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyMemberName);
    }
    if existing.iter().any(|m| m == name) {
        return Err(ValidationError::DuplicateMember(name.to_string()));
    }
    Ok(())
}

/// Check the fields of a new group
pub fn validate_new_group(name: &str, members: &[String]) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyGroupName);
    }

    let mut seen: Vec<String> = Vec::with_capacity(members.len());
    for member in members {
        validate_member_name(member, &seen)?;
        seen.push(member.trim().to_string());
    }

    if seen.len() < MIN_GROUP_MEMBERS {
        return Err(ValidationError::TooFewMembers(seen.len()));
    }

    Ok(())
}

/// Parse an amount typed by the user
pub fn parse_amount(input: &str) -> Result<Money, ValidationError> {
    Money::parse(input).map_err(|_| ValidationError::InvalidAmount(input.to_string()))
}

/// Check the fields of a new expense against its group
pub fn validate_new_expense(
    group: &Group,
    title: &str,
    amount: Money,
    paid_by: &str,
    category: &str,
) -> Result<ExpenseCategory, ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    if !amount.is_finite() {
        return Err(ValidationError::InvalidAmount(amount.value().to_string()));
    }

    let paid_by = paid_by.trim();
    if paid_by.is_empty() {
        return Err(ValidationError::MissingPayer);
    }
    if !group.has_member(paid_by) {
        return Err(ValidationError::PayerNotMember {
            payer: paid_by.to_string(),
            group: group.name.clone(),
        });
    }

    category
        .parse::<ExpenseCategory>()
        .map_err(ValidationError::UnknownCategory)
}
