// ============================================================================
// Menu Domain - Catalog entities and their validation rules
// ============================================================================
//
// This module contains ALL MenuItem-specific code:
// - Value objects (Category, Topping, Sweetness, MenuVariant)
// - Payloads (NewMenuItem, MenuItemPatch)
// - Events (MenuEvent, AvailabilityNotice)
// - Errors (MenuError enum)
// - Entity (MenuItem with per-variant details)
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
