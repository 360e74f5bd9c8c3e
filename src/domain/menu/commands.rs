use serde::{Deserialize, Serialize};

use super::value_objects::MenuVariant;

// ============================================================================
// Menu Payloads - creation and partial edit input
// ============================================================================

/// Raw input for creating a menu item, one shape per variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NewMenuItem {
    Plain {
        name: String,
        category: String,
        price: f64,
    },
    Coffee {
        name: String,
        price: f64,
        origin: String,
        roast: String,
    },
    Food {
        name: String,
        price: f64,
        vegetarian: bool,
        topping: String,
    },
    Beverage {
        name: String,
        price: f64,
        cold: bool,
        sweetness: i32,
    },
}

impl NewMenuItem {
    pub fn variant(&self) -> MenuVariant {
        match self {
            NewMenuItem::Plain { .. } => MenuVariant::Plain,
            NewMenuItem::Coffee { .. } => MenuVariant::Coffee,
            NewMenuItem::Food { .. } => MenuVariant::Food,
            NewMenuItem::Beverage { .. } => MenuVariant::Beverage,
        }
    }
}

/// Partial update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub available: Option<bool>,
    pub origin: Option<String>,
    pub roast: Option<String>,
    pub vegetarian: Option<bool>,
    pub topping: Option<String>,
    pub cold: Option<bool>,
    pub sweetness: Option<i32>,
}

impl MenuItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.available.is_none()
            && self.origin.is_none()
            && self.roast.is_none()
            && self.vegetarian.is_none()
            && self.topping.is_none()
            && self.cold.is_none()
            && self.sweetness.is_none()
    }
}
