// ============================================================================
// Account Domain - Identity, Capabilities and Loyalty
// ============================================================================
//
// This module contains ALL Account-specific code:
// - Value objects (Role, AccessLevel, LoyaltyTier, Capability)
// - Events (AccountRegistered, AccountPointsAdded, etc.)
// - Commands (AddPoints, ChangePhone, etc.)
// - Errors (AccountError enum)
// - Aggregate (Account with Customer/Admin profiles)
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod commands;
pub mod errors;
pub mod aggregate;

// Re-export for convenience
pub use value_objects::*;
pub use events::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
