use super::value_objects::OrderStatus;

// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Table number cannot be empty")]
    EmptyTableNumber,

    #[error("Invalid item quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Quantity of menu item {0} is too large")]
    QuantityOverflow(String),

    #[error("Invalid order status: {0}")]
    InvalidStatus(String),

    #[error("Cannot change order status from {from} to {to}")]
    InvalidStatusTransition { from: OrderStatus, to: OrderStatus },

    #[error("Order items cannot be empty")]
    EmptyOrder,

    #[error("Menu item is not available: {0}")]
    ItemUnavailable(String),
}
