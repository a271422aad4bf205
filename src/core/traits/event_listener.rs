use crate::core::models::query_event::{QueryCompletedEvent, QueryCreatedEvent};

/// Port through which the engine reports query lifecycle events.
///
/// The engine calls these synchronously from its dispatch threads, so
/// implementations must not panic and have no way to report failure.
pub trait EventListener: Send + Sync {
    fn query_created(&self, _event: &QueryCreatedEvent) {}

    fn query_completed(&self, event: &QueryCompletedEvent);
}
