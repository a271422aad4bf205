pub mod audit_log_listener;
