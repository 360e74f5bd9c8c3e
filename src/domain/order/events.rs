use serde::{Deserialize, Serialize};

use crate::event_sourcing::DomainEvent;
use super::value_objects::OrderStatus;

// ============================================================================
// Order Events - Domain Events for Order Aggregate
// ============================================================================

/// Order Event - Union type for all order events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    Opened(OrderOpened),
    LineAdded(OrderLineAdded),
    LineRemoved(OrderLineRemoved),
    StatusChanged(OrderStatusChanged),
}

impl DomainEvent for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::Opened(_) => "OrderOpened",
            OrderEvent::LineAdded(_) => "OrderLineAdded",
            OrderEvent::LineRemoved(_) => "OrderLineRemoved",
            OrderEvent::StatusChanged(_) => "OrderStatusChanged",
        }
    }
}

// ============================================================================
// Individual Event Types
// ============================================================================

/// Order Opened - Initial event in order lifecycle
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderOpened {
    pub table_number: String,
    pub customer_name: String,
}

/// Line Added - item snapshot at the time it was added
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderLineAdded {
    pub menu_item_id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    /// True when the quantity went into an existing line
    pub merged: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderLineRemoved {
    pub menu_item_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderStatusChanged {
    pub from: OrderStatus,
    pub to: OrderStatus,
}
