use std::time::Duration;

use serde_json::{Map, Number, Value};

use crate::core::errors::{AuditError, Result};
use crate::core::models::query_event::QueryCompletedEvent;
use crate::core::traits::field_encoder::FieldEncoder;

/// Writes `statistics` in natural units.
///
/// Durations are integer milliseconds under `*Millis` keys; sizes and
/// counts are copied as-is. Unlike the summary record nothing is
/// converted to seconds.
pub struct StatisticsEncoder;

fn millis(event: &QueryCompletedEvent, key: &str, duration: Duration) -> Result<Value> {
    let millis = u64::try_from(duration.as_millis()).map_err(|_| AuditError::Serialization {
        detail: format!(
            "{key} of query {} does not fit in 64 bits: {duration:?}",
            event.query_id()
        ),
    })?;
    Ok(Value::from(millis))
}

impl FieldEncoder for StatisticsEncoder {
    fn key(&self) -> &'static str {
        "statistics"
    }

    fn encode(&self, event: &QueryCompletedEvent) -> Result<Option<Value>> {
        let stats = &event.statistics;
        let mut out = Map::new();

        let durations = [
            ("cpuTimeMillis", Some(stats.cpu_time)),
            ("wallTimeMillis", Some(stats.wall_time)),
            ("queuedTimeMillis", Some(stats.queued_time)),
            ("analysisTimeMillis", stats.analysis_time),
            ("distributedPlanningTimeMillis", stats.distributed_planning_time),
        ];
        for (key, duration) in durations {
            if let Some(duration) = duration {
                out.insert(key.into(), millis(event, key, duration)?);
            }
        }

        out.insert("peakMemoryBytes".into(), stats.peak_memory_bytes.into());
        out.insert("totalBytes".into(), stats.total_bytes.into());
        out.insert("totalRows".into(), stats.total_rows.into());
        out.insert("outputBytes".into(), stats.output_bytes.into());
        out.insert("outputRows".into(), stats.output_rows.into());
        out.insert("writtenBytes".into(), stats.written_bytes.into());
        out.insert("writtenRows".into(), stats.written_rows.into());

        // JSON has no NaN or infinity.
        let cumulative = Number::from_f64(stats.cumulative_memory).ok_or_else(|| {
            AuditError::Serialization {
                detail: format!(
                    "cumulativeMemory of query {} is not a finite number: {}",
                    event.query_id(),
                    stats.cumulative_memory
                ),
            }
        })?;
        out.insert("cumulativeMemory".into(), Value::Number(cumulative));

        out.insert("completedSplits".into(), stats.completed_splits.into());
        out.insert("complete".into(), stats.complete.into());

        Ok(Some(Value::Object(out)))
    }
}
