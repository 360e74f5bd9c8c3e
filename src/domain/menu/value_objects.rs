use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::MenuError;

// ============================================================================
// Menu Value Objects
// ============================================================================

/// Fixed menu category set. Parsing is case-insensitive, storage canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Coffee,
    Food,
    Beverage,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Coffee, Category::Food, Category::Beverage];

    pub fn parse(raw: &str) -> Result<Self, MenuError> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(raw))
            .ok_or_else(|| MenuError::InvalidCategory(raw.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Coffee => "Coffee",
            Category::Food => "Food",
            Category::Beverage => "Beverage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Toppings a food item may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topping {
    Chocolate,
    Cheese,
    Peanut,
    Fruit,
    Cream,
    NoTopping,
}

impl Topping {
    pub const ALL: [Topping; 6] = [
        Topping::Chocolate,
        Topping::Cheese,
        Topping::Peanut,
        Topping::Fruit,
        Topping::Cream,
        Topping::NoTopping,
    ];

    pub fn parse(raw: &str) -> Result<Self, MenuError> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|topping| topping.as_str().eq_ignore_ascii_case(raw))
            .ok_or_else(|| MenuError::InvalidTopping(raw.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Topping::Chocolate => "Chocolate",
            Topping::Cheese => "Cheese",
            Topping::Peanut => "Peanut",
            Topping::Fruit => "Fruit",
            Topping::Cream => "Cream",
            Topping::NoTopping => "No Topping",
        }
    }

    /// Canonical names joined for error messages and prompts
    pub fn options() -> String {
        Self::ALL.iter().map(Topping::as_str).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Beverage sweetness level, 0..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Sweetness(u8);

impl Sweetness {
    pub const MAX: u8 = 5;

    pub fn new(level: i32) -> Result<Self, MenuError> {
        if !(0..=Self::MAX as i32).contains(&level) {
            return Err(MenuError::InvalidSweetness(level));
        }
        Ok(Self(level as u8))
    }

    pub fn level(&self) -> u8 {
        self.0
    }
}

/// Discriminator of the menu item sum type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuVariant {
    Plain,
    Coffee,
    Food,
    Beverage,
}

impl fmt::Display for MenuVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MenuVariant::Plain => "Plain",
            MenuVariant::Coffee => "Coffee",
            MenuVariant::Food => "Food",
            MenuVariant::Beverage => "Beverage",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
