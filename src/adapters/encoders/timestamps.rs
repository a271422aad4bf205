use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::core::errors::Result;
use crate::core::models::query_event::QueryCompletedEvent;
use crate::core::traits::field_encoder::FieldEncoder;

/// Writes one of the event's instants as an RFC 3339 UTC string with
/// millisecond precision.
pub struct TimestampEncoder {
    key: &'static str,
    instant: fn(&QueryCompletedEvent) -> DateTime<Utc>,
}

impl TimestampEncoder {
    pub fn create_time() -> Self {
        Self {
            key: "createTime",
            instant: |e| e.create_time,
        }
    }

    pub fn execution_start_time() -> Self {
        Self {
            key: "executionStartTime",
            instant: |e| e.execution_start_time,
        }
    }

    pub fn end_time() -> Self {
        Self {
            key: "endTime",
            instant: |e| e.end_time,
        }
    }
}

impl FieldEncoder for TimestampEncoder {
    fn key(&self) -> &'static str {
        self.key
    }

    fn encode(&self, event: &QueryCompletedEvent) -> Result<Option<Value>> {
        let instant = (self.instant)(event);
        Ok(Some(Value::String(
            instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_event;

    #[test]
    fn writes_utc_with_millis() {
        let event = sample_event("Q1");

        let created = TimestampEncoder::create_time().encode(&event).unwrap();
        let ended = TimestampEncoder::end_time().encode(&event).unwrap();

        assert_eq!(created, Some(Value::from("2023-11-14T22:13:20.123Z")));
        assert_eq!(ended, Some(Value::from("2023-11-14T22:13:22.706Z")));
    }

    #[test]
    fn each_encoder_has_its_own_key() {
        assert_eq!(TimestampEncoder::create_time().key(), "createTime");
        assert_eq!(
            TimestampEncoder::execution_start_time().key(),
            "executionStartTime"
        );
        assert_eq!(TimestampEncoder::end_time().key(), "endTime");
    }
}
