use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::menu::SharedMenuItem;
use super::errors::OrderError;

// ============================================================================
// Order Value Objects
// ============================================================================

/// One menu item reference with its quantity. The item is shared with the
/// catalog, so price and name are read live and never cached here.
#[derive(Debug, Clone)]
pub struct OrderLine {
    item: SharedMenuItem,
    quantity: u32,
}

impl OrderLine {
    pub fn new(item: SharedMenuItem, quantity: u32) -> Self {
        Self { item, quantity }
    }

    pub fn item(&self) -> &SharedMenuItem {
        &self.item
    }

    pub fn menu_item_id(&self) -> String {
        self.item.borrow().id().to_string()
    }

    pub fn name(&self) -> String {
        self.item.borrow().name().to_string()
    }

    pub fn unit_price(&self) -> f64 {
        self.item.borrow().price()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub(crate) fn increase(&mut self, quantity: u32) -> Result<(), OrderError> {
        let Some(merged) = self.quantity.checked_add(quantity) else {
            return Err(OrderError::QuantityOverflow(self.menu_item_id()));
        };
        self.quantity = merged;
        Ok(())
    }

    pub(crate) fn refers_to(&self, menu_item_id: &str) -> bool {
        self.item.borrow().id() == menu_item_id
    }

    pub fn subtotal(&self) -> f64 {
        self.unit_price() * self.quantity as f64
    }
}

impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<20} | {} | Rp {:.2} | Rp {:.2}",
            self.name(),
            self.quantity,
            self.unit_price(),
            self.subtotal()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    New,
    Processing,
    Done,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::New,
        OrderStatus::Processing,
        OrderStatus::Done,
        OrderStatus::Cancelled,
    ];

    pub fn parse(raw: &str) -> Result<Self, OrderError> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw))
            .ok_or_else(|| OrderError::InvalidStatus(raw.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "New",
            OrderStatus::Processing => "Processing",
            OrderStatus::Done => "Done",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Transition table
    pub fn allowed_transitions(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::New => &[OrderStatus::Processing, OrderStatus::Done, OrderStatus::Cancelled],
            OrderStatus::Processing => &[OrderStatus::Done, OrderStatus::Cancelled],
            OrderStatus::Done | OrderStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
