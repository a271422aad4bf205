use serde::{Deserialize, Serialize};

/// Value written to `eventType` for every summary record.
pub const QUERY_COMPLETED_EVENT_TYPE: &str = "QueryCompletedEvent";

/// One line of the summary audit log.
///
/// A flat view of a completed query: times in seconds, timestamps both
/// formatted and as epoch seconds. The failure fields are omitted from
/// the JSON when the query succeeded; the client fields are always
/// present, empty when the engine did not report them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub event_type: String,
    pub query_id: String,
    pub query: String,
    pub uri: String,
    pub state: String,

    pub cpu_time: f64,
    pub wall_time: f64,
    pub queued_time: f64,
    pub peak_memory_bytes: u64,
    pub total_bytes: u64,
    pub total_rows: u64,
    pub completed_splits: u32,

    pub create_time: String,
    pub execution_start_time: String,
    pub end_time: String,
    pub create_timestamp: f64,
    pub execution_start_timestamp: f64,
    pub end_timestamp: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failures_json: Option<String>,

    pub remote_client_address: String,
    pub client_user: String,
    pub user_agent: String,
    pub source: String,
}

impl AuditRecord {
    /// Returns true if any failure field is set.
    pub fn has_failure(&self) -> bool {
        self.error_code.is_some()
            || self.error_name.is_some()
            || self.failure_type.is_some()
            || self.failure_message.is_some()
            || self.failures_json.is_some()
    }
}
