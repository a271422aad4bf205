use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::errors::{AuditError, Result};

/// Directory holding both audit logs.
pub const AUDIT_LOG_PATH: &str = "audit-log-path";
/// File name of the summary log.
pub const AUDIT_LOG_FILENAME: &str = "audit-log-filename";
/// File name of the full log; the full log is off when unset.
pub const AUDIT_LOG_FULL_FILENAME: &str = "audit-log-full-filename";

/// Prefix the engine puts in front of event listener properties.
pub const PROPERTY_PREFIX: &str = "event-listener.";

/// Where the audit sink writes. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditLogConfig {
    pub log_directory: PathBuf,
    pub summary_log_file_name: String,
    pub full_log_file_name: Option<String>,
}

impl AuditLogConfig {
    pub fn new(
        log_directory: impl Into<PathBuf>,
        summary_log_file_name: impl Into<String>,
        full_log_file_name: Option<String>,
    ) -> Self {
        Self {
            log_directory: log_directory.into(),
            summary_log_file_name: summary_log_file_name.into(),
            full_log_file_name,
        }
    }

    /// Build the configuration from the engine's key/value properties.
    ///
    /// Each key is looked up as `event-listener.<key>` first, then bare.
    ///
    /// # Errors
    ///
    /// - `MissingConfig` if `audit-log-path` or `audit-log-filename` is absent.
    /// - `InvalidConfig` if either of them is blank.
    pub fn from_properties(properties: &HashMap<String, String>) -> Result<Self> {
        let lookup = |key: &str| {
            properties
                .get(&format!("{PROPERTY_PREFIX}{key}"))
                .or_else(|| properties.get(key))
                .cloned()
        };

        Self::resolve(
            lookup(AUDIT_LOG_PATH),
            lookup(AUDIT_LOG_FILENAME),
            lookup(AUDIT_LOG_FULL_FILENAME),
        )
    }

    /// Load the configuration from a TOML file.
    ///
    /// Settings live in an `[event-listener]` table (or as dotted
    /// `event-listener.audit-log-path = ...` keys, which TOML treats the
    /// same way) and go through the same checks as `from_properties`.
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Err(AuditError::InvalidConfig {
                detail: format!("{} not found", config_path.display()),
            });
        }
        let content = std::fs::read_to_string(config_path)?;
        let file: ConfigFile = toml::from_str(&content).map_err(|e| AuditError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", config_path.display()),
        })?;

        let section = file.event_listener.unwrap_or_default();
        Self::resolve(
            section.audit_log_path,
            section.audit_log_filename,
            section.audit_log_full_filename,
        )
    }

    fn resolve(
        log_directory: Option<String>,
        summary_log_file_name: Option<String>,
        full_log_file_name: Option<String>,
    ) -> Result<Self> {
        let log_directory = required(AUDIT_LOG_PATH, log_directory)?;
        let summary_log_file_name = required(AUDIT_LOG_FILENAME, summary_log_file_name)?;
        let full_log_file_name = full_log_file_name.filter(|name| !name.trim().is_empty());

        Ok(Self::new(
            log_directory,
            summary_log_file_name,
            full_log_file_name,
        ))
    }

    /// `{log_directory}/{summary_log_file_name}`
    pub fn summary_log_path(&self) -> PathBuf {
        self.log_directory.join(&self.summary_log_file_name)
    }

    /// `{log_directory}/{full_log_file_name}`, when the full log is on.
    pub fn full_log_path(&self) -> Option<PathBuf> {
        self.full_log_file_name
            .as_ref()
            .map(|name| self.log_directory.join(name))
    }
}

fn required(key: &str, value: Option<String>) -> Result<String> {
    match value {
        None => Err(AuditError::MissingConfig { key: key.into() }),
        Some(v) if v.trim().is_empty() => Err(AuditError::InvalidConfig {
            detail: format!("'{key}' must not be blank"),
        }),
        Some(v) => Ok(v),
    }
}

/// Top level of a TOML configuration file.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(rename = "event-listener")]
    event_listener: Option<ListenerSection>,
}

/// The `[event-listener]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ListenerSection {
    audit_log_path: Option<String>,
    audit_log_filename: Option<String>,
    audit_log_full_filename: Option<String>,
}
