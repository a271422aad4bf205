use std::collections::HashMap;

use crate::adapters::audit::json_audit_logger::JsonAuditLogger;
use crate::adapters::encoders;
use crate::config::audit_config::AuditLogConfig;
use crate::core::errors::Result;
use crate::core::models::audit_record::AuditRecord;
use crate::core::models::query_event::{QueryCompletedEvent, QueryCreatedEvent};
use crate::core::services::full_log_serializer::FullLogSerializer;
use crate::core::services::record_builder::RecordBuilder;
use crate::core::traits::audit::AuditLogger;
use crate::core::traits::event_listener::EventListener;

/// Event listener that writes one summary line, and optionally one
/// full line, per completed query.
///
/// The two logs are written one after the other and fail separately:
/// a summary write error never skips the full write, and neither one
/// reaches the engine. Failures are reported through `tracing` at
/// `error` level together with the payload that was lost.
pub struct AuditLogListener {
    summary: Box<dyn AuditLogger>,
    full: Option<Box<dyn AuditLogger>>,
    serializer: FullLogSerializer,
}

impl AuditLogListener {
    /// Create a listener writing to the files named in `config`.
    pub fn new(config: &AuditLogConfig) -> Self {
        let summary = JsonAuditLogger::at(config.summary_log_path());
        let full = config.full_log_path().map(JsonAuditLogger::at);

        Self::with_loggers(
            Box::new(summary),
            full.map(|f| Box::new(f) as Box<dyn AuditLogger>),
            encoders::default_serializer(),
        )
    }

    /// Create a listener from the engine's key/value properties.
    ///
    /// # Errors
    ///
    /// Fails when a required key is missing; see
    /// [`AuditLogConfig::from_properties`].
    pub fn from_properties(properties: &HashMap<String, String>) -> Result<Self> {
        let config = AuditLogConfig::from_properties(properties)?;
        Ok(Self::new(&config))
    }

    /// Create a listener over arbitrary log streams.
    pub fn with_loggers(
        summary: Box<dyn AuditLogger>,
        full: Option<Box<dyn AuditLogger>>,
        serializer: FullLogSerializer,
    ) -> Self {
        Self {
            summary,
            full,
            serializer,
        }
    }

    pub fn writes_full_log(&self) -> bool {
        self.full.is_some()
    }

    fn write_summary(&self, event: &QueryCompletedEvent, record: &AuditRecord) {
        let payload = match serde_json::to_string(record) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(
                    query_id = %event.query_id(),
                    error = %e,
                    "Error serializing audit record"
                );
                return;
            }
        };

        match self.summary.append_line(&payload) {
            Ok(()) => tracing::debug!(
                query_id = %event.query_id(),
                path = %self.summary.location().display(),
                "Audit record written"
            ),
            Err(e) => {
                tracing::error!(
                    query_id = %event.query_id(),
                    path = %self.summary.location().display(),
                    error = %e,
                    "Error writing event log to file"
                );
                tracing::error!(payload = %payload, "EventLog write failed");
            }
        }
    }

    fn write_full(&self, full: &dyn AuditLogger, event: &QueryCompletedEvent) {
        let payload = match self.serializer.serialize(event) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(
                    query_id = %event.query_id(),
                    path = %full.location().display(),
                    error = %e,
                    "Error serializing full audit log"
                );
                return;
            }
        };

        match full.append_line(&payload) {
            Ok(()) => tracing::debug!(
                query_id = %event.query_id(),
                path = %full.location().display(),
                "Full audit log written"
            ),
            Err(e) => {
                tracing::error!(
                    query_id = %event.query_id(),
                    path = %full.location().display(),
                    error = %e,
                    "Error writing full event log to file"
                );
                tracing::error!(payload = %payload, "Full EventLog write failed");
            }
        }
    }
}

impl EventListener for AuditLogListener {
    fn query_created(&self, event: &QueryCreatedEvent) {
        tracing::debug!(
            query_id = %event.metadata.query_id,
            "QUERY SQL : [ {} ]",
            event.metadata.query
        );
    }

    fn query_completed(&self, event: &QueryCompletedEvent) {
        let record = RecordBuilder.build(event);
        self.write_summary(event, &record);

        if let Some(full) = &self.full {
            self.write_full(&**full, event);
        }
    }
}
