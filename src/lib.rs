//! # query-audit
//!
//! Audit log event listener for a query engine.
//!
//! For every completed query the listener appends:
//!
//! - one line to the **summary log**: a flat [`AuditRecord`] with times
//!   in seconds and timestamps both formatted (`yyyyMMddHHmmss.SSS`,
//!   local zone) and as epoch seconds;
//! - optionally one line to the **full log**: the whole event as nested
//!   JSON, built by a registry of per-field-group encoders.
//!
//! Both logs are newline-delimited JSON. A failed write is reported via
//! `tracing` and never reaches the engine.
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use query_audit::{AuditLogListener, EventListener};
//!
//! # fn example(event: &query_audit::QueryCompletedEvent) -> query_audit::Result<()> {
//! let properties = HashMap::from([
//!     ("event-listener.audit-log-path".to_string(), "/var/log/presto".to_string()),
//!     ("event-listener.audit-log-filename".to_string(), "audit.log".to_string()),
//!     ("event-listener.audit-log-full-filename".to_string(), "audit-full.log".to_string()),
//! ]);
//! let listener = AuditLogListener::from_properties(&properties)?;
//! listener.query_completed(event);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod core;

#[cfg(test)]
mod test_support;

pub use crate::adapters::audit::json_audit_logger::JsonAuditLogger;
pub use crate::adapters::encoders::default_serializer;
pub use crate::adapters::listener::audit_log_listener::AuditLogListener;
pub use crate::config::audit_config::AuditLogConfig;
pub use crate::core::errors::{AuditError, Result};
pub use crate::core::models::audit_record::AuditRecord;
pub use crate::core::models::query_event::{
    ErrorCode, ErrorType, QueryCompletedEvent, QueryContext, QueryCreatedEvent, QueryFailureInfo,
    QueryIOMetadata, QueryInputMetadata, QueryMetadata, QueryOutputMetadata, QueryStatistics,
};
pub use crate::core::services::full_log_serializer::FullLogSerializer;
pub use crate::core::services::record_builder::RecordBuilder;
pub use crate::core::traits::audit::AuditLogger;
pub use crate::core::traits::event_listener::EventListener;
pub use crate::core::traits::field_encoder::FieldEncoder;
