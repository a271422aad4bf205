//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::DateTime;
use query_audit::{
    ErrorCode, ErrorType, QueryCompletedEvent, QueryContext, QueryCreatedEvent, QueryFailureInfo,
    QueryIOMetadata, QueryInputMetadata, QueryMetadata, QueryStatistics,
};
use tracing_subscriber::fmt::MakeWriter;

pub fn completed_event(query_id: &str, user: &str) -> QueryCompletedEvent {
    QueryCompletedEvent {
        metadata: metadata(query_id),
        statistics: QueryStatistics {
            cpu_time: Duration::from_millis(1500),
            wall_time: Duration::from_millis(3000),
            queued_time: Duration::from_millis(250),
            analysis_time: None,
            distributed_planning_time: None,
            peak_memory_bytes: 2048,
            total_bytes: 1_048_576,
            total_rows: 12_345,
            output_bytes: 2_000,
            output_rows: 20,
            written_bytes: 0,
            written_rows: 0,
            cumulative_memory: 10_240.0,
            completed_splits: 16,
            complete: true,
        },
        context: context(user),
        io_metadata: QueryIOMetadata {
            inputs: vec![QueryInputMetadata {
                catalog_name: "hive".into(),
                schema: "web".into(),
                table: "page_views".into(),
                columns: vec!["user_id".into(), "url".into()],
                connector_info: None,
            }],
            output: None,
        },
        failure_info: None,
        create_time: DateTime::from_timestamp_millis(1_717_200_000_000).unwrap(),
        execution_start_time: DateTime::from_timestamp_millis(1_717_200_000_250).unwrap(),
        end_time: DateTime::from_timestamp_millis(1_717_200_003_250).unwrap(),
    }
}

pub fn failed_event(query_id: &str) -> QueryCompletedEvent {
    let mut event = completed_event(query_id, "bob");
    event.metadata.query_state = "FAILED".into();
    event.failure_info = Some(QueryFailureInfo {
        error_code: ErrorCode {
            code: 131_079,
            name: "EXCEEDED_LOCAL_MEMORY_LIMIT".into(),
            error_type: ErrorType::InsufficientResources,
        },
        failure_type: Some("com.facebook.presto.ExceededMemoryLimitException".into()),
        failure_message: Some("Query exceeded per-node user memory limit of 1GB".into()),
        failure_task: Some("20240601_000000_00001_abcde.1.0".into()),
        failure_host: Some("worker-1".into()),
        failures_json: r#"{"type":"ExceededMemoryLimitException","message":"Query exceeded per-node user memory limit of 1GB","cause":{"type":"RuntimeException","message":"allocation failed","cause":null}}"#.into(),
    });
    event
}

pub fn created_event(query_id: &str) -> QueryCreatedEvent {
    QueryCreatedEvent {
        create_time: DateTime::from_timestamp_millis(1_717_200_000_000).unwrap(),
        context: context("alice"),
        metadata: metadata(query_id),
    }
}

fn metadata(query_id: &str) -> QueryMetadata {
    QueryMetadata {
        query_id: query_id.into(),
        transaction_id: None,
        query: "SELECT url FROM page_views WHERE user_id <> 0".into(),
        query_state: "FINISHED".into(),
        uri: format!("http://coordinator:8080/v1/query/{query_id}"),
        plan: None,
        payload: None,
    }
}

fn context(user: &str) -> QueryContext {
    QueryContext {
        user: user.into(),
        principal: None,
        remote_client_address: Some("192.168.1.20".into()),
        user_agent: Some("StatementClient/0.290".into()),
        client_info: None,
        source: Some("presto-cli".into()),
        catalog: Some("hive".into()),
        schema: Some("web".into()),
        resource_group_id: Some("global.adhoc".into()),
        session_properties: BTreeMap::new(),
        server_address: "10.0.0.1".into(),
        server_version: "0.290".into(),
        environment: "production".into(),
    }
}

/// Collects everything a `tracing` subscriber writes.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a debug-level subscriber and return what it logged.
pub fn capture_logs<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}
