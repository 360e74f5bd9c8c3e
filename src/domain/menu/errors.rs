use super::value_objects::{MenuVariant, Topping};

// ============================================================================
// Menu Validation Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MenuError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Price must be a finite non-negative number: {0}")]
    InvalidPrice(f64),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Bean origin cannot be empty")]
    EmptyOrigin,

    #[error("Roast level cannot be empty")]
    EmptyRoast,

    #[error("Invalid topping: {0}. Options: {options}", options = Topping::options())]
    InvalidTopping(String),

    #[error("Sweetness level must be between 0 and 5, got {0}")]
    InvalidSweetness(i32),

    #[error("Category of a {0} item is fixed")]
    CategoryFixed(MenuVariant),

    #[error("Field `{field}` does not apply to a {variant} item")]
    FieldNotApplicable {
        field: &'static str,
        variant: MenuVariant,
    },
}
