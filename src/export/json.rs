//! JSON Export functionality
//!
//! Exports the complete ledger to JSON format with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, Group};
use crate::storage::StoreState;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub groups: Vec<Group>,

    pub expenses: Vec<Expense>,
}

impl FullExport {
    /// Capture a snapshot for export
    pub fn from_state(state: &StoreState) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            groups: state.groups.clone(),
            expenses: state.expenses.clone(),
        }
    }
}

/// Write the full ledger as pretty-printed JSON
pub fn export_full_json<W: Write>(state: &StoreState, writer: &mut W) -> LedgerResult<()> {
    let export = FullExport::from_state(state);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}
