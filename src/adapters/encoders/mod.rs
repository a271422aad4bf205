//! Built-in field-group encoders for the full audit log.

pub mod context;
pub mod failure_info;
pub mod io_metadata;
pub mod metadata;
pub mod statistics;
pub mod timestamps;

use crate::core::services::full_log_serializer::FullLogSerializer;

/// A serializer with one encoder per field group of a completed-query
/// event. Callers can still `register` or `unregister` groups on it.
pub fn default_serializer() -> FullLogSerializer {
    FullLogSerializer::empty()
        .with(metadata::MetadataEncoder)
        .with(statistics::StatisticsEncoder)
        .with(context::ContextEncoder)
        .with(io_metadata::IoMetadataEncoder)
        .with(failure_info::FailureInfoEncoder)
        .with(timestamps::TimestampEncoder::create_time())
        .with(timestamps::TimestampEncoder::execution_start_time())
        .with(timestamps::TimestampEncoder::end_time())
}
