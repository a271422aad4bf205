use std::fmt::Display;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::core::models::audit_record::{AuditRecord, QUERY_COMPLETED_EVENT_TYPE};
use crate::core::models::query_event::QueryCompletedEvent;

/// `yyyyMMddHHmmss.SSS`
const TIME_FORMAT: &str = "%Y%m%d%H%M%S%.3f";

/// Flattens a completed-query event into an `AuditRecord`.
pub struct RecordBuilder;

impl RecordBuilder {
    /// Build the summary record for `event`.
    ///
    /// Pure and infallible: every optional part of the event is matched
    /// explicitly and falls back to "absent" (failure fields) or an
    /// empty string (client fields).
    pub fn build(&self, event: &QueryCompletedEvent) -> AuditRecord {
        let metadata = &event.metadata;
        let stats = &event.statistics;
        let context = &event.context;

        let mut record = AuditRecord {
            event_type: QUERY_COMPLETED_EVENT_TYPE.to_string(),
            query_id: metadata.query_id.clone(),
            query: metadata.query.clone(),
            uri: metadata.uri.clone(),
            state: metadata.query_state.clone(),

            cpu_time: millis_to_seconds(stats.cpu_time),
            wall_time: millis_to_seconds(stats.wall_time),
            queued_time: millis_to_seconds(stats.queued_time),
            peak_memory_bytes: stats.peak_memory_bytes,
            total_bytes: stats.total_bytes,
            total_rows: stats.total_rows,
            completed_splits: stats.completed_splits,

            create_time: format_instant(&event.create_time),
            execution_start_time: format_instant(&event.execution_start_time),
            end_time: format_instant(&event.end_time),
            create_timestamp: epoch_seconds(&event.create_time),
            execution_start_timestamp: epoch_seconds(&event.execution_start_time),
            end_timestamp: epoch_seconds(&event.end_time),

            error_code: None,
            error_name: None,
            failure_type: None,
            failure_message: None,
            failures_json: None,

            remote_client_address: or_empty(&context.remote_client_address),
            client_user: context.user.clone(),
            user_agent: or_empty(&context.user_agent),
            source: or_empty(&context.source),
        };

        if let Some(failure) = &event.failure_info {
            record.error_code = Some(failure.error_code.code);
            record.error_name = Some(failure.error_code.name.clone());
            if let Some(failure_type) = &failure.failure_type {
                record.failure_type = Some(failure_type.clone());
            }
            if let Some(message) = &failure.failure_message {
                record.failure_message = Some(message.clone());
            }
            record.failures_json = Some(failure.failures_json.clone());
        }

        record
    }
}

/// Format an instant in the process's local time zone.
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    format_instant_in(instant, &Local)
}

/// Format an instant as `yyyyMMddHHmmss.SSS` in the given zone.
pub fn format_instant_in<Tz>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.with_timezone(tz).format(TIME_FORMAT).to_string()
}

/// Epoch milliseconds as fractional seconds.
pub fn epoch_seconds(instant: &DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / 1000.0
}

/// Whole milliseconds of `duration` as fractional seconds.
pub fn millis_to_seconds(duration: Duration) -> f64 {
    duration.as_millis() as f64 / 1000.0
}

fn or_empty(value: &Option<String>) -> String {
    match value {
        Some(v) => v.clone(),
        None => String::new(),
    }
}
