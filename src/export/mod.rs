//! Export module for splitledger
//!
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: the complete ledger with a schema version

pub mod csv;
pub mod json;

pub use self::csv::{export_expenses_csv, export_summary_csv};
pub use self::json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
