pub mod audit_record;
pub mod query_event;
