pub mod full_log_serializer;
pub mod record_builder;
