use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::commands::{MenuItemPatch, NewMenuItem};
use super::errors::MenuError;
use super::events::AvailabilityNotice;
use super::value_objects::{Category, MenuVariant, Sweetness, Topping};

// ============================================================================
// Menu Item - Catalog entity
// ============================================================================

/// Catalog-owned item shared with the order lines that reference it
pub type SharedMenuItem = Rc<RefCell<MenuItem>>;

/// Variant-specific payload of a menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant")]
pub enum MenuItemDetails {
    Plain,
    Coffee {
        origin: String,
        roast: String,
    },
    Food {
        vegetarian: bool,
        topping: Topping,
    },
    Beverage {
        cold: bool,
        sweetness: Sweetness,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    id: String,
    name: String,
    category: Category,
    price: f64,
    available: bool,
    details: MenuItemDetails,
}

impl MenuItem {
    /// Build a fully validated item. Fails without producing anything if any
    /// field is invalid.
    pub fn new(id: impl Into<String>, draft: NewMenuItem) -> Result<Self, MenuError> {
        let (name, price) = match &draft {
            NewMenuItem::Plain { name, price, .. }
            | NewMenuItem::Coffee { name, price, .. }
            | NewMenuItem::Food { name, price, .. }
            | NewMenuItem::Beverage { name, price, .. } => (validate_name(name)?, validate_price(*price)?),
        };

        let (category, details) = match draft {
            NewMenuItem::Plain { category, .. } => (Category::parse(&category)?, MenuItemDetails::Plain),
            NewMenuItem::Coffee { origin, roast, .. } => (
                Category::Coffee,
                MenuItemDetails::Coffee {
                    origin: non_empty(&origin, MenuError::EmptyOrigin)?,
                    roast: non_empty(&roast, MenuError::EmptyRoast)?,
                },
            ),
            NewMenuItem::Food { vegetarian, topping, .. } => (
                Category::Food,
                MenuItemDetails::Food {
                    vegetarian,
                    topping: Topping::parse(&topping)?,
                },
            ),
            NewMenuItem::Beverage { cold, sweetness, .. } => (
                Category::Beverage,
                MenuItemDetails::Beverage {
                    cold,
                    sweetness: Sweetness::new(sweetness)?,
                },
            ),
        };

        Ok(Self {
            id: id.into(),
            name,
            category,
            price,
            available: true,
            details,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn details(&self) -> &MenuItemDetails {
        &self.details
    }

    pub fn variant(&self) -> MenuVariant {
        match self.details {
            MenuItemDetails::Plain => MenuVariant::Plain,
            MenuItemDetails::Coffee { .. } => MenuVariant::Coffee,
            MenuItemDetails::Food { .. } => MenuVariant::Food,
            MenuItemDetails::Beverage { .. } => MenuVariant::Beverage,
        }
    }

    // ------------------------------------------------------------------------
    // Setters - every one re-validates before committing
    // ------------------------------------------------------------------------

    pub fn set_name(&mut self, name: &str) -> Result<(), MenuError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    /// Only plain items choose their category
    pub fn set_category(&mut self, category: &str) -> Result<(), MenuError> {
        let category = Category::parse(category)?;
        match self.details {
            MenuItemDetails::Plain => {
                self.category = category;
                Ok(())
            }
            _ => Err(MenuError::CategoryFixed(self.variant())),
        }
    }

    pub fn set_price(&mut self, price: f64) -> Result<(), MenuError> {
        self.price = validate_price(price)?;
        Ok(())
    }

    /// Beverages answer with a notice; every other variant changes silently.
    pub fn set_available(&mut self, available: bool) -> Option<AvailabilityNotice> {
        self.available = available;
        match self.details {
            MenuItemDetails::Beverage { .. } => Some(AvailabilityNotice {
                name: self.name.clone(),
                available,
            }),
            _ => None,
        }
    }

    pub fn set_origin(&mut self, value: &str) -> Result<(), MenuError> {
        let variant = self.variant();
        match &mut self.details {
            MenuItemDetails::Coffee { origin, .. } => {
                *origin = non_empty(value, MenuError::EmptyOrigin)?;
                Ok(())
            }
            _ => Err(MenuError::FieldNotApplicable { field: "origin", variant }),
        }
    }

    pub fn set_roast(&mut self, value: &str) -> Result<(), MenuError> {
        let variant = self.variant();
        match &mut self.details {
            MenuItemDetails::Coffee { roast, .. } => {
                *roast = non_empty(value, MenuError::EmptyRoast)?;
                Ok(())
            }
            _ => Err(MenuError::FieldNotApplicable { field: "roast", variant }),
        }
    }

    pub fn set_vegetarian(&mut self, value: bool) -> Result<(), MenuError> {
        let variant = self.variant();
        match &mut self.details {
            MenuItemDetails::Food { vegetarian, .. } => {
                *vegetarian = value;
                Ok(())
            }
            _ => Err(MenuError::FieldNotApplicable { field: "vegetarian", variant }),
        }
    }

    pub fn set_topping(&mut self, value: &str) -> Result<(), MenuError> {
        let variant = self.variant();
        match &mut self.details {
            MenuItemDetails::Food { topping, .. } => {
                *topping = Topping::parse(value)?;
                Ok(())
            }
            _ => Err(MenuError::FieldNotApplicable { field: "topping", variant }),
        }
    }

    pub fn set_cold(&mut self, value: bool) -> Result<(), MenuError> {
        let variant = self.variant();
        match &mut self.details {
            MenuItemDetails::Beverage { cold, .. } => {
                *cold = value;
                Ok(())
            }
            _ => Err(MenuError::FieldNotApplicable { field: "cold", variant }),
        }
    }

    pub fn set_sweetness(&mut self, value: i32) -> Result<(), MenuError> {
        let variant = self.variant();
        match &mut self.details {
            MenuItemDetails::Beverage { sweetness, .. } => {
                *sweetness = Sweetness::new(value)?;
                Ok(())
            }
            _ => Err(MenuError::FieldNotApplicable { field: "sweetness", variant }),
        }
    }

    /// Apply a partial edit to a copy of this item.
    ///
    /// Returns the edited copy and the beverage notice, if any. `self` is
    /// never touched, so a failing field leaves the original intact.
    pub fn patched(&self, patch: &MenuItemPatch) -> Result<(MenuItem, Option<AvailabilityNotice>), MenuError> {
        let mut edited = self.clone();

        if let Some(name) = &patch.name {
            edited.set_name(name)?;
        }
        if let Some(category) = &patch.category {
            edited.set_category(category)?;
        }
        if let Some(price) = patch.price {
            edited.set_price(price)?;
        }
        if let Some(origin) = &patch.origin {
            edited.set_origin(origin)?;
        }
        if let Some(roast) = &patch.roast {
            edited.set_roast(roast)?;
        }
        if let Some(vegetarian) = patch.vegetarian {
            edited.set_vegetarian(vegetarian)?;
        }
        if let Some(topping) = &patch.topping {
            edited.set_topping(topping)?;
        }
        if let Some(cold) = patch.cold {
            edited.set_cold(cold)?;
        }
        if let Some(sweetness) = patch.sweetness {
            edited.set_sweetness(sweetness)?;
        }

        // Last, so the notice carries the edited name
        let notice = patch.available.and_then(|available| edited.set_available(available));

        Ok((edited, notice))
    }

    /// Human-readable summary whose shape depends on the variant
    pub fn describe(&self) -> String {
        match &self.details {
            MenuItemDetails::Plain => "Regular Menu".to_string(),
            MenuItemDetails::Coffee { origin, roast } => {
                format!("{} (Origin: {}, Roast: {})", self.name, origin, roast)
            }
            MenuItemDetails::Food { vegetarian, topping } => format!(
                "{} ({}, Topping: {})",
                self.name,
                if *vegetarian { "Vegetarian" } else { "Non-Vegetarian" },
                topping
            ),
            MenuItemDetails::Beverage { cold, sweetness } => format!(
                "{} ({}, Sweetness: {}/{})",
                self.name,
                if *cold { "Cold" } else { "Hot" },
                sweetness.level(),
                Sweetness::MAX
            ),
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | {:<20} | {:<10} | Rp {:.2} | {}",
            self.id,
            self.name,
            self.category,
            self.price,
            if self.available { "Available" } else { "Unavailable" }
        )?;

        match &self.details {
            MenuItemDetails::Plain => Ok(()),
            MenuItemDetails::Coffee { origin, roast } => {
                write!(f, " | Origin: {} | Roast: {}", origin, roast)
            }
            MenuItemDetails::Food { vegetarian, topping } => write!(
                f,
                " | {} | Topping: {}",
                if *vegetarian { "Vegetarian" } else { "Non-Vegetarian" },
                topping
            ),
            MenuItemDetails::Beverage { cold, sweetness } => write!(
                f,
                " | {} | Sweetness: {}/{}",
                if *cold { "Cold" } else { "Hot" },
                sweetness.level(),
                Sweetness::MAX
            ),
        }
    }
}

fn validate_name(name: &str) -> Result<String, MenuError> {
    non_empty(name, MenuError::EmptyName)
}

fn validate_price(price: f64) -> Result<f64, MenuError> {
    // NaN fails the comparison
    if !(price >= 0.0 && price.is_finite()) {
        return Err(MenuError::InvalidPrice(price));
    }
    Ok(price)
}

fn non_empty(value: &str, error: MenuError) -> Result<String, MenuError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// Unit Tests
// ============================================================================
