use serde::{Deserialize, Serialize};

use crate::event_sourcing::DomainEvent;
use super::value_objects::{LoyaltyTier, Role};

// ============================================================================
// Account Domain Events
// ============================================================================

/// Union type for all account events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum AccountEvent {
    Registered(AccountRegistered),
    PointsAdded(AccountPointsAdded),
    TierChanged(AccountTierChanged),
    PhoneChanged(AccountPhoneChanged),
    DepartmentChanged(AccountDepartmentChanged),
    AccessLevelChanged(AccountAccessLevelChanged),
    Removed,
}

impl DomainEvent for AccountEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AccountEvent::Registered(_) => "AccountRegistered",
            AccountEvent::PointsAdded(_) => "AccountPointsAdded",
            AccountEvent::TierChanged(_) => "AccountTierChanged",
            AccountEvent::PhoneChanged(_) => "AccountPhoneChanged",
            AccountEvent::DepartmentChanged(_) => "AccountDepartmentChanged",
            AccountEvent::AccessLevelChanged(_) => "AccountAccessLevelChanged",
            AccountEvent::Removed => "AccountRemoved",
        }
    }
}

// Individual event types

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRegistered {
    pub role: Role,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountPointsAdded {
    pub delta: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountTierChanged {
    pub from: LoyaltyTier,
    pub to: LoyaltyTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountPhoneChanged {
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDepartmentChanged {
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountAccessLevelChanged {
    pub from: u8,
    pub to: u8,
}
