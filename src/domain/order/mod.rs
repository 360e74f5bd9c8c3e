// ============================================================================
// Order Domain - Business Logic for Order Aggregate
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (OrderLine, OrderStatus with its transition table)
// - Events (OrderOpened, OrderLineAdded, etc.)
// - Commands (OrderLineRequest)
// - Errors (OrderError enum)
// - Aggregate (Order with business logic and receipt rendering)
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
