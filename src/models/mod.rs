//! Core data models for splitledger
//!
//! This module contains the records kept by the ledger: groups of people
//! and the expenses they share, plus the value types those records use.

pub mod category;
pub mod expense;
pub mod group;
pub mod ids;
pub mod money;
pub mod split;

pub use category::ExpenseCategory;
pub use expense::{Expense, NewExpense};
pub use group::{Group, NewGroup};
pub use ids::{ExpenseId, GroupId};
pub use money::Money;
pub use split::Split;
