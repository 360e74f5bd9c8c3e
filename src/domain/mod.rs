// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains domain-specific entities, aggregates and rules.
// Each one has its own subdirectory with:
// - Value objects
// - Events
// - Commands / payloads
// - Errors
// - Aggregate implementation
//
// This layer performs no I/O and knows nothing about the registries.
//
// ============================================================================

pub mod menu;
pub mod order;
pub mod account;
