// ============================================================================
// Event Sourcing Store - Generic Journal Layer
// ============================================================================
//
// This module contains GENERIC journal infrastructure.
// All components work with ANY aggregate/event type.
//
// ============================================================================

pub mod event_store;

pub use event_store::{EventStore, JournalError};
