use serde::{Deserialize, Serialize};

// ============================================================================
// Order Commands - Represent user intent
// ============================================================================

/// One requested line of a new order, referencing the catalog by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    pub menu_item_id: String,
    pub quantity: u32,
}

impl OrderLineRequest {
    pub fn new(menu_item_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            menu_item_id: menu_item_id.into(),
            quantity,
        }
    }
}
