//! Audit logging system for splitledger
//!
//! Records every group and expense creation in an append-only audit log.
//!
//! - `AuditEntry`: a single entry with timestamp, operation, entity
//!   information and the created record.
//! - `AuditLogger`: writes entries to the log file as line-delimited JSON.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
