use serde::Serialize;
use serde_json::Value;

use crate::core::errors::Result;
use crate::core::models::query_event::QueryCompletedEvent;
use crate::core::traits::field_encoder::FieldEncoder;

/// Writes `metadata`: query identity, text and state.
pub struct MetadataEncoder;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MetadataView<'a> {
    query_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    transaction_id: Option<&'a str>,
    query: &'a str,
    query_state: &'a str,
    uri: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<&'a str>,
}

impl FieldEncoder for MetadataEncoder {
    fn key(&self) -> &'static str {
        "metadata"
    }

    fn encode(&self, event: &QueryCompletedEvent) -> Result<Option<Value>> {
        let metadata = &event.metadata;
        let view = MetadataView {
            query_id: &metadata.query_id,
            transaction_id: metadata.transaction_id.as_deref(),
            query: &metadata.query,
            query_state: &metadata.query_state,
            uri: &metadata.uri,
            plan: metadata.plan.as_deref(),
            payload: metadata.payload.as_deref(),
        };
        Ok(Some(serde_json::to_value(view)?))
    }
}
