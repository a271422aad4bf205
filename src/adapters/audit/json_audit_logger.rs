use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::core::errors::{AuditError, Result};
use crate::core::traits::audit::AuditLogger;

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Audit logger that appends JSON lines to a file.
///
/// Every call opens the file in append mode, writes one line and closes
/// it again; no handle is held between events. Missing parent
/// directories are not created, so a misconfigured directory shows up
/// as a write error instead of a log in an unexpected place.
pub struct JsonAuditLogger {
    log_path: PathBuf,
}

impl JsonAuditLogger {
    /// Create a logger that writes to `{log_dir}/{log_file}`.
    pub fn new(log_dir: &Path, log_file: &str) -> Self {
        Self {
            log_path: log_dir.join(log_file),
        }
    }

    /// Create a logger for an already-joined path.
    pub fn at(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
        }
    }

    /// Read every entry back, skipping blank lines.
    ///
    /// Returns an empty list when the file does not exist yet.
    pub fn read_entries(&self) -> Result<Vec<Value>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(&self.log_path)?;
        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let entry: Value =
                serde_json::from_str(trimmed).map_err(|e| AuditError::Serialization {
                    detail: format!(
                        "Malformed entry at {} line {}: {e}",
                        self.log_path.display(),
                        line_num + 1
                    ),
                })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    fn write_error(&self, source: std::io::Error) -> AuditError {
        AuditError::AuditWrite {
            path: self.log_path.clone(),
            source,
        }
    }
}

impl AuditLogger for JsonAuditLogger {
    fn append_line(&self, line: &str) -> Result<()> {
        let mut buf = String::with_capacity(line.len() + LINE_SEPARATOR.len());
        buf.push_str(line);
        buf.push_str(LINE_SEPARATOR);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| self.write_error(e))?;

        // One write per line: O_APPEND keeps concurrent lines whole.
        file.write_all(buf.as_bytes())
            .map_err(|e| self.write_error(e))?;

        Ok(())
    }

    fn location(&self) -> &Path {
        &self.log_path
    }
}
