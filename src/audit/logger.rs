//! Append-only audit log
//!
//! One JSON object per line. Writes open the file in append mode, so entries
//! from earlier runs are never rewritten.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{LedgerError, LedgerResult};

use super::entry::AuditEntry;

/// Reads and appends entries in a JSONL audit file
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry and flush
    pub fn log(&self, entry: &AuditEntry) -> LedgerResult<()> {
        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| LedgerError::Io(format!("Failed to create audit directory: {}", e)))?;
        }

        let mut line = serde_json::to_vec(entry)
            .map_err(|e| LedgerError::Json(format!("Failed to encode audit entry: {}", e)))?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| LedgerError::Io(format!("Failed to open audit log: {}", e)))?;
        file.write_all(&line)
            .and_then(|_| file.flush())
            .map_err(|e| LedgerError::Io(format!("Failed to append audit entry: {}", e)))
    }

    /// Every entry in the order it was written; a missing file is an empty log
    pub fn read_all(&self) -> LedgerResult<Vec<AuditEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(LedgerError::Io(format!("Failed to open audit log: {}", e))),
        };

        BufReader::new(file)
            .lines()
            .enumerate()
            .filter(|(_, line)| !matches!(line, Ok(text) if text.trim().is_empty()))
            .map(|(idx, line)| -> LedgerResult<AuditEntry> {
                let line = line.map_err(|e| {
                    LedgerError::Io(format!("Failed to read audit line {}: {}", idx + 1, e))
                })?;
                serde_json::from_str(&line).map_err(|e| {
                    LedgerError::Json(format!("Bad audit entry on line {}: {}", idx + 1, e))
                })
            })
            .collect()
    }

    /// The `count` newest entries, newest first
    pub fn read_recent(&self, count: usize) -> LedgerResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        entries.reverse();
        entries.truncate(count);
        Ok(entries)
    }
}
