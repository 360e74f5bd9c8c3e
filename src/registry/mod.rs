// ============================================================================
// Registries - Process-wide owning collections
// ============================================================================
//
// One registry per entity kind. Each owns its entities, its id allocator
// and an in-memory journal of the events it produced.
//
// ============================================================================

pub mod id_allocator;
pub mod catalog;
pub mod order_book;
pub mod accounts;

pub use id_allocator::IdAllocator;
pub use catalog::MenuCatalog;
pub use order_book::OrderBook;
pub use accounts::AccountRegistry;
