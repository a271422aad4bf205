use std::path::PathBuf;

/// All errors raised by the audit sink.
///
/// Configuration errors surface at construction time. Everything else
/// is produced while handling an event and is logged by the listener
/// instead of being returned to the engine.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error(
        "Missing required configuration key '{key}'\n\n  \
         Set it in the event listener properties, e.g.:\n    \
         event-listener.{key}=<value>"
    )]
    MissingConfig { key: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("Failed to serialize audit log: {detail}")]
    Serialization { detail: String },

    #[error("Cannot append to audit log at {}: {source}", .path.display())]
    AuditWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AuditError {
    /// True for errors that come from a missing or malformed setting.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingConfig { .. } | Self::InvalidConfig { .. })
    }

    /// True for errors raised while turning an event into JSON.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. } | Self::Json(_))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AuditError>;
