//! Event fixtures shared by the unit tests.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::DateTime;

use crate::core::models::query_event::{
    ErrorCode, ErrorType, QueryCompletedEvent, QueryContext, QueryCreatedEvent, QueryFailureInfo,
    QueryIOMetadata, QueryInputMetadata, QueryMetadata, QueryOutputMetadata, QueryStatistics,
};

pub fn metadata(query_id: &str) -> QueryMetadata {
    QueryMetadata {
        query_id: query_id.to_string(),
        transaction_id: Some("txn-0001".to_string()),
        query: "SELECT name FROM orders WHERE total > 10 AND total < 100".to_string(),
        query_state: "FINISHED".to_string(),
        uri: format!("http://coordinator:8080/v1/query/{query_id}"),
        plan: None,
        payload: None,
    }
}

pub fn context() -> QueryContext {
    QueryContext {
        user: "alice".to_string(),
        principal: None,
        remote_client_address: Some("10.0.0.7".to_string()),
        user_agent: Some("presto-cli".to_string()),
        client_info: None,
        source: Some("reporting".to_string()),
        catalog: Some("hive".to_string()),
        schema: Some("sales".to_string()),
        resource_group_id: None,
        session_properties: BTreeMap::from([("query_max_run_time".to_string(), "1h".to_string())]),
        server_address: "10.0.0.1".to_string(),
        server_version: "0.290".to_string(),
        environment: "test".to_string(),
    }
}

pub fn statistics() -> QueryStatistics {
    QueryStatistics {
        cpu_time: Duration::from_millis(1500),
        wall_time: Duration::from_millis(2250),
        queued_time: Duration::from_millis(10),
        analysis_time: Some(Duration::from_millis(42)),
        distributed_planning_time: None,
        peak_memory_bytes: 2048,
        total_bytes: 4096,
        total_rows: 100,
        output_bytes: 512,
        output_rows: 10,
        written_bytes: 0,
        written_rows: 0,
        cumulative_memory: 3072.5,
        completed_splits: 8,
        complete: true,
    }
}

pub fn io_metadata() -> QueryIOMetadata {
    QueryIOMetadata {
        inputs: vec![QueryInputMetadata {
            catalog_name: "hive".to_string(),
            schema: "sales".to_string(),
            table: "orders".to_string(),
            columns: vec!["name".to_string(), "total".to_string()],
            connector_info: None,
        }],
        output: Some(QueryOutputMetadata {
            catalog_name: "hive".to_string(),
            schema: "sales".to_string(),
            table: "order_summary".to_string(),
        }),
    }
}

pub fn failure_info() -> QueryFailureInfo {
    QueryFailureInfo {
        error_code: ErrorCode {
            code: 1,
            name: "SYNTAX_ERROR".to_string(),
            error_type: ErrorType::UserError,
        },
        failure_type: Some("com.facebook.presto.sql.parser.ParsingException".to_string()),
        failure_message: Some("line 1:8: mismatched input".to_string()),
        failure_task: None,
        failure_host: Some("worker-3".to_string()),
        failures_json: r#"[{"type":"ParsingException","message":"line 1:8: mismatched input","cause":null}]"#
            .to_string(),
    }
}

/// A successful query with every optional client field populated.
pub fn sample_event(query_id: &str) -> QueryCompletedEvent {
    QueryCompletedEvent {
        metadata: metadata(query_id),
        statistics: statistics(),
        context: context(),
        io_metadata: io_metadata(),
        failure_info: None,
        create_time: DateTime::from_timestamp_millis(1_700_000_000_123).unwrap(),
        execution_start_time: DateTime::from_timestamp_millis(1_700_000_000_456).unwrap(),
        end_time: DateTime::from_timestamp_millis(1_700_000_002_706).unwrap(),
    }
}

pub fn created_event(query_id: &str) -> QueryCreatedEvent {
    QueryCreatedEvent {
        create_time: DateTime::from_timestamp_millis(1_700_000_000_123).unwrap(),
        context: context(),
        metadata: metadata(query_id),
    }
}
