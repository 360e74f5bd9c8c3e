use serde::{Deserialize, Serialize};

use crate::event_sourcing::DomainEvent;
use super::value_objects::MenuVariant;

// ============================================================================
// Menu Events - Catalog journal entries
// ============================================================================

/// Union type for all catalog events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum MenuEvent {
    Created {
        variant: MenuVariant,
        name: String,
        price: f64,
    },
    Edited {
        name: String,
    },
    Removed {
        name: String,
    },
    /// Only beverages announce availability changes
    AvailabilityAnnounced {
        name: String,
        available: bool,
    },
}

impl DomainEvent for MenuEvent {
    fn event_type(&self) -> &'static str {
        match self {
            MenuEvent::Created { .. } => "MenuItemCreated",
            MenuEvent::Edited { .. } => "MenuItemEdited",
            MenuEvent::Removed { .. } => "MenuItemRemoved",
            MenuEvent::AvailabilityAnnounced { .. } => "MenuItemAvailabilityAnnounced",
        }
    }
}

/// Notification raised by a beverage when its availability is set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityNotice {
    pub name: String,
    pub available: bool,
}

impl AvailabilityNotice {
    pub fn message(&self) -> String {
        format!(
            "Availability of beverage {} changed to: {}",
            self.name,
            if self.available { "Available" } else { "Unavailable" }
        )
    }
}

impl From<AvailabilityNotice> for MenuEvent {
    fn from(notice: AvailabilityNotice) -> Self {
        MenuEvent::AvailabilityAnnounced {
            name: notice.name,
            available: notice.available,
        }
    }
}
