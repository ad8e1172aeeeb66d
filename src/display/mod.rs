//! Display formatting for terminal output
//!
//! Plain-text tables and detail views for groups and expenses.

pub mod expense;
pub mod group;

pub use expense::{format_activity, format_expense_list};
pub use group::{format_group_details, format_group_list};

/// Truncate a string to a maximum number of characters
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
