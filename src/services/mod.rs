//! Service layer for splitledger
//!
//! The service layer provides checked creation on top of the store: input is
//! trimmed and validated before any entity is constructed, and expenses get
//! their equal split here.

pub mod expense;
pub mod group;

pub use expense::{ExpenseDraft, ExpenseService};
pub use group::GroupService;
