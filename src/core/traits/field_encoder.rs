use serde_json::Value;

use crate::core::errors::Result;
use crate::core::models::query_event::QueryCompletedEvent;

/// Encodes one field group of a completed-query event for the full log.
///
/// Each group owns its output key and its own rules; the serializer
/// only stitches the results together.
pub trait FieldEncoder: Send + Sync {
    /// Top-level key this encoder writes under.
    fn key(&self) -> &'static str;

    /// Encode the group, or return `Ok(None)` to leave the key out.
    fn encode(&self, event: &QueryCompletedEvent) -> Result<Option<Value>>;
}
