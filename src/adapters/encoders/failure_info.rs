use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::errors::{AuditError, Result};
use crate::core::models::query_event::{ErrorCode, ErrorType, QueryCompletedEvent};
use crate::core::traits::field_encoder::FieldEncoder;

/// Writes `failureInfo` for failed queries.
///
/// The engine's pre-rendered cause chain is parsed and nested under
/// `failures`, so the full log carries it as structure rather than as
/// an escaped string.
pub struct FailureInfoEncoder;

#[derive(Serialize)]
struct ErrorCodeView<'a> {
    code: i32,
    name: &'a str,
    #[serde(rename = "type")]
    error_type: &'static str,
}

impl<'a> From<&'a ErrorCode> for ErrorCodeView<'a> {
    fn from(error_code: &'a ErrorCode) -> Self {
        Self {
            code: error_code.code,
            name: &error_code.name,
            error_type: error_type_name(error_code.error_type),
        }
    }
}

fn error_type_name(error_type: ErrorType) -> &'static str {
    match error_type {
        ErrorType::UserError => "USER_ERROR",
        ErrorType::InternalError => "INTERNAL_ERROR",
        ErrorType::InsufficientResources => "INSUFFICIENT_RESOURCES",
        ErrorType::External => "EXTERNAL",
    }
}

impl FieldEncoder for FailureInfoEncoder {
    fn key(&self) -> &'static str {
        "failureInfo"
    }

    fn encode(&self, event: &QueryCompletedEvent) -> Result<Option<Value>> {
        let Some(failure) = &event.failure_info else {
            return Ok(None);
        };

        let failures: Value =
            serde_json::from_str(&failure.failures_json).map_err(|e| AuditError::Serialization {
                detail: format!(
                    "failuresJson of query {} is not valid JSON: {e}",
                    event.query_id()
                ),
            })?;

        let mut out = Map::new();
        out.insert("errorCode".into(), serde_json::to_value(ErrorCodeView::from(&failure.error_code))?);
        for (key, value) in [
            ("failureType", &failure.failure_type),
            ("failureMessage", &failure.failure_message),
            ("failureTask", &failure.failure_task),
            ("failureHost", &failure.failure_host),
        ] {
            if let Some(value) = value {
                out.insert(key.into(), Value::String(value.clone()));
            }
        }
        out.insert("failures".into(), failures);

        Ok(Some(Value::Object(out)))
    }
}
