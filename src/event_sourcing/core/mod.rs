// ============================================================================
// Event Sourcing Core - Generic Infrastructure Abstractions
// ============================================================================
//
// This module contains GENERIC, reusable infrastructure that works with
// ANY domain aggregate.
//
// Key Principles:
// - No domain-specific code (no Order, Account, MenuItem, etc.)
// - Generic over aggregate and event types
//
// ============================================================================

pub mod aggregate;
pub mod event;

// Re-export core types for convenience
pub use aggregate::Aggregate;
pub use event::{DomainEvent, EventEnvelope, serialize_event};
