use std::collections::HashMap;

use crate::event_sourcing::core::{serialize_event, DomainEvent, EventEnvelope};

// ============================================================================
// Generic Event Store - In-Memory Journal
// ============================================================================
//
// This is a GENERIC append-only store that works with ANY event type.
// Everything lives in process memory and is lost on exit.
//
// Type Parameter:
// - `E`: The domain event type (must implement DomainEvent trait)
//
// Responsibilities:
// 1. Append events per aggregate (append-only)
// 2. Load event history for aggregates
// 3. Ensure optimistic version checks
// 4. Export the journal as JSON lines
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JournalError {
    #[error("Cannot append empty event list")]
    EmptyAppend,

    #[error("Version conflict on {aggregate_id}: expected version {expected}, but current is {current}")]
    VersionConflict {
        aggregate_id: String,
        expected: i64,
        current: i64,
    },

    #[error("Failed to serialize event: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for JournalError {
    fn from(e: serde_json::Error) -> Self {
        JournalError::Serialization(e.to_string())
    }
}

#[derive(Debug)]
pub struct EventStore<E: DomainEvent> {
    aggregate_type_name: String,  // e.g., "Order", "Account", "MenuItem"
    events: Vec<EventEnvelope<E>>,
    versions: HashMap<String, i64>,
}

impl<E: DomainEvent> EventStore<E> {
    pub fn new(aggregate_type_name: &str) -> Self {
        Self {
            aggregate_type_name: aggregate_type_name.to_string(),
            events: Vec::new(),
            versions: HashMap::new(),
        }
    }

    pub fn aggregate_type_name(&self) -> &str {
        &self.aggregate_type_name
    }

    /// Append events for one aggregate.
    /// Returns the new version number after appending
    pub fn append_events(
        &mut self,
        aggregate_id: &str,
        expected_version: i64,
        events: Vec<E>,
        actor: Option<&str>,
    ) -> Result<i64, JournalError> {
        if events.is_empty() {
            return Err(JournalError::EmptyAppend);
        }

        let current_version = self.current_version(aggregate_id);
        if current_version != expected_version {
            return Err(JournalError::VersionConflict {
                aggregate_id: aggregate_id.to_string(),
                expected: expected_version,
                current: current_version,
            });
        }

        let mut new_version = expected_version;
        for event in events {
            new_version += 1;
            self.push(aggregate_id, new_version, event, actor);
        }

        self.versions.insert(aggregate_id.to_string(), new_version);
        Ok(new_version)
    }

    /// Append one event at the head of the stream without a version check.
    /// For owners that keep no version of their own.
    pub fn append(&mut self, aggregate_id: &str, event: E, actor: Option<&str>) -> i64 {
        let new_version = self.current_version(aggregate_id) + 1;
        self.push(aggregate_id, new_version, event, actor);
        self.versions.insert(aggregate_id.to_string(), new_version);
        new_version
    }

    /// Current version of an aggregate (0 if it has no events)
    pub fn current_version(&self, aggregate_id: &str) -> i64 {
        self.versions.get(aggregate_id).copied().unwrap_or(0)
    }

    pub fn aggregate_exists(&self, aggregate_id: &str) -> bool {
        self.versions.contains_key(aggregate_id)
    }

    /// Event history of one aggregate, oldest first
    pub fn load_events(&self, aggregate_id: &str) -> Vec<&EventEnvelope<E>> {
        self.events
            .iter()
            .filter(|envelope| envelope.aggregate_id == aggregate_id)
            .collect()
    }

    pub fn all_events(&self) -> &[EventEnvelope<E>] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn push(&mut self, aggregate_id: &str, sequence_number: i64, event: E, actor: Option<&str>) {
        let mut envelope = EventEnvelope::new(aggregate_id, sequence_number, event);
        if let Some(actor) = actor {
            envelope = envelope.with_actor(actor);
        }
        tracing::trace!(
            aggregate_type = %self.aggregate_type_name,
            aggregate_id,
            sequence = sequence_number,
            event_type = %envelope.event_type,
            "Event appended"
        );
        self.events.push(envelope);
    }

    /// One serialized envelope per line, in append order
    pub fn export_json_lines(&self) -> Result<String, JournalError> {
        let mut out = String::new();
        for envelope in &self.events {
            out.push_str(&serialize_event(envelope)?);
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    enum CounterEvent {
        Incremented(u32),
        Reset,
    }

    impl DomainEvent for CounterEvent {
        fn event_type(&self) -> &'static str {
            match self {
                CounterEvent::Incremented(_) => "CounterIncremented",
                CounterEvent::Reset => "CounterReset",
            }
        }
    }

    #[test]
    fn test_append_assigns_sequence_numbers() {
        let mut store = EventStore::new("Counter");

        let version = store
            .append_events("c1", 0, vec![CounterEvent::Incremented(1), CounterEvent::Reset], None)
            .unwrap();

        assert_eq!(version, 2);
        assert_eq!(store.current_version("c1"), 2);
        let history = store.load_events("c1");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sequence_number, 1);
        assert_eq!(history[1].event_type, "CounterReset");
    }

    #[test]
    fn test_version_conflict_is_rejected() {
        let mut store = EventStore::new("Counter");
        store.append_events("c1", 0, vec![CounterEvent::Reset], None).unwrap();

        let result = store.append_events("c1", 0, vec![CounterEvent::Reset], None);
        assert!(matches!(
            result,
            Err(JournalError::VersionConflict { expected: 0, current: 1, .. })
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_append_fails() {
        let mut store: EventStore<CounterEvent> = EventStore::new("Counter");
        let result = store.append_events("c1", 0, vec![], None);
        assert!(matches!(result, Err(JournalError::EmptyAppend)));
        assert!(!store.aggregate_exists("c1"));
    }

    #[test]
    fn test_histories_are_kept_per_aggregate() {
        let mut store = EventStore::new("Counter");
        store.append_events("c1", 0, vec![CounterEvent::Incremented(1)], None).unwrap();
        store.append_events("c2", 0, vec![CounterEvent::Incremented(5)], Some("admin")).unwrap();
        store.append_events("c1", 1, vec![CounterEvent::Reset], None).unwrap();

        assert_eq!(store.load_events("c1").len(), 2);
        assert_eq!(store.load_events("c2").len(), 1);
        assert_eq!(store.load_events("c2")[0].actor.as_deref(), Some("admin"));
        assert_eq!(store.all_events().len(), 3);
    }

    #[test]
    fn test_unchecked_append_follows_stream_head() {
        let mut store = EventStore::new("Counter");
        store.append_events("c1", 0, vec![CounterEvent::Incremented(1)], None).unwrap();

        assert_eq!(store.append("c1", CounterEvent::Reset, Some("admin")), 2);
        assert_eq!(store.append("c2", CounterEvent::Reset, None), 1);

        let history = store.load_events("c1");
        assert_eq!(history[1].sequence_number, 2);
        assert_eq!(history[1].actor.as_deref(), Some("admin"));
        assert!(store.append_events("c1", 1, vec![CounterEvent::Reset], None).is_err());
    }

    #[test]
    fn test_export_json_lines() {
        let mut store = EventStore::new("Counter");
        store.append_events("c1", 0, vec![CounterEvent::Incremented(7)], None).unwrap();

        let exported = store.export_json_lines().unwrap();
        assert_eq!(exported.lines().count(), 1);
        assert!(exported.contains("\"event_type\":\"CounterIncremented\""));
        assert!(exported.contains("\"aggregate_id\":\"c1\""));
    }
}
