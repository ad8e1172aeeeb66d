//! splitledger - shared expense tracking for small groups
//!
//! Groups of people log what they spend together; every expense is split
//! equally across the group's members. The library keeps the authoritative
//! in-memory state, persists it through a pluggable key-value backend, and
//! derives balances, summaries and an activity feed from it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (groups, expenses, splits, money)
//! - `validation`: Input checks run before entities are created
//! - `storage`: Key-value persistence and the expense store
//! - `services`: Validated creation and lookup
//! - `reports`: Balances, summaries and the activity feed
//! - `audit`: Audit logging system
//! - `export`: CSV and JSON export
//! - `display`, `cli`: Terminal front end
//!
//! # Example
//!
//! ```rust,ignore
//! use splitledger::services::GroupService;
//! use splitledger::storage::{ExpenseStore, MemoryStore};
//!
//! let store = ExpenseStore::new(MemoryStore::new());
//! store.load_data().await;
//! let trip = GroupService::new(&store)
//!     .create("Trip", &["Alice".into(), "Bob".into()])
//!     .await?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::{LedgerError, LedgerResult};
