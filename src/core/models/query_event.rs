use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Identity and text of a query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryMetadata {
    pub query_id: String,
    pub transaction_id: Option<String>,
    pub query: String,
    pub query_state: String,
    pub uri: String,
    pub plan: Option<String>,
    pub payload: Option<String>,
}

/// Resource usage of a finished query.
///
/// Durations carry millisecond resolution; sub-millisecond parts are
/// ignored by every consumer in this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryStatistics {
    pub cpu_time: Duration,
    pub wall_time: Duration,
    pub queued_time: Duration,
    pub analysis_time: Option<Duration>,
    pub distributed_planning_time: Option<Duration>,
    pub peak_memory_bytes: u64,
    pub total_bytes: u64,
    pub total_rows: u64,
    pub output_bytes: u64,
    pub output_rows: u64,
    pub written_bytes: u64,
    pub written_rows: u64,
    /// Byte-seconds of memory held over the query's lifetime.
    pub cumulative_memory: f64,
    pub completed_splits: u32,
    pub complete: bool,
}

/// Session and client information attached to a query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryContext {
    pub user: String,
    pub principal: Option<String>,
    pub remote_client_address: Option<String>,
    pub user_agent: Option<String>,
    pub client_info: Option<String>,
    pub source: Option<String>,
    pub catalog: Option<String>,
    pub schema: Option<String>,
    pub resource_group_id: Option<String>,
    pub session_properties: BTreeMap<String, String>,
    pub server_address: String,
    pub server_version: String,
    pub environment: String,
}

/// A table read by the query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryInputMetadata {
    pub catalog_name: String,
    pub schema: String,
    pub table: String,
    pub columns: Vec<String>,
    pub connector_info: Option<serde_json::Value>,
}

/// The table written by the query, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutputMetadata {
    pub catalog_name: String,
    pub schema: String,
    pub table: String,
}

/// Tables touched by a query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryIOMetadata {
    pub inputs: Vec<QueryInputMetadata>,
    pub output: Option<QueryOutputMetadata>,
}

/// Broad classification of an engine error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    UserError,
    InternalError,
    InsufficientResources,
    External,
}

/// Numeric error code plus its symbolic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCode {
    pub code: i32,
    pub name: String,
    pub error_type: ErrorType,
}

/// Why a query failed.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFailureInfo {
    pub error_code: ErrorCode,
    pub failure_type: Option<String>,
    pub failure_message: Option<String>,
    pub failure_task: Option<String>,
    pub failure_host: Option<String>,
    /// The full cause chain, already rendered as JSON by the engine.
    pub failures_json: String,
}

/// Emitted once when the engine accepts a query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryCreatedEvent {
    pub create_time: DateTime<Utc>,
    pub context: QueryContext,
    pub metadata: QueryMetadata,
}

/// Emitted once when a query finishes, successfully or not.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryCompletedEvent {
    pub metadata: QueryMetadata,
    pub statistics: QueryStatistics,
    pub context: QueryContext,
    pub io_metadata: QueryIOMetadata,
    pub failure_info: Option<QueryFailureInfo>,
    pub create_time: DateTime<Utc>,
    pub execution_start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl QueryCompletedEvent {
    /// Shorthand used by diagnostics.
    pub fn query_id(&self) -> &str {
        &self.metadata.query_id
    }
}
