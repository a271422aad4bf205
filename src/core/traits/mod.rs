pub mod audit;
pub mod event_listener;
pub mod field_encoder;
