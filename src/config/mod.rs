pub mod audit_config;
