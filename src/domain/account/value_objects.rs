use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::AccountError;

// ============================================================================
// Account Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Customer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Customer tier for loyalty discounts, derived from accumulated points
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl LoyaltyTier {
    pub fn from_points(points: u64) -> Self {
        match points {
            0..=99 => LoyaltyTier::Bronze,
            100..=299 => LoyaltyTier::Silver,
            300..=499 => LoyaltyTier::Gold,
            _ => LoyaltyTier::Platinum,
        }
    }

    /// Discount as a fraction of the order total
    pub fn discount_rate(&self) -> f64 {
        match self {
            LoyaltyTier::Bronze => 0.0,
            LoyaltyTier::Silver => 0.05,
            LoyaltyTier::Gold => 0.10,
            LoyaltyTier::Platinum => 0.15,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoyaltyTier::Bronze => "Bronze",
            LoyaltyTier::Silver => "Silver",
            LoyaltyTier::Gold => "Gold",
            LoyaltyTier::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Admin access level, 1..=3
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccessLevel(u8);

impl AccessLevel {
    pub fn new(level: i32) -> Result<Self, AccountError> {
        if !(1..=3).contains(&level) {
            return Err(AccountError::InvalidAccessLevel(level));
        }
        Ok(Self(level as u8))
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    pub fn can_view_reports(&self) -> bool {
        self.0 >= 2
    }

    pub fn can_manage_users(&self) -> bool {
        self.0 == 3
    }
}

/// Capabilities guarded by the restaurant facade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    ViewReports,
    ManageUsers,
    ManageOrders,
    ManageMenu,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ViewReports => "view_reports",
            Capability::ManageUsers => "manage_users",
            Capability::ManageOrders => "manage_orders",
            Capability::ManageMenu => "manage_menu",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_breakpoints() {
        assert_eq!(LoyaltyTier::from_points(0), LoyaltyTier::Bronze);
        assert_eq!(LoyaltyTier::from_points(99), LoyaltyTier::Bronze);
        assert_eq!(LoyaltyTier::from_points(100), LoyaltyTier::Silver);
        assert_eq!(LoyaltyTier::from_points(299), LoyaltyTier::Silver);
        assert_eq!(LoyaltyTier::from_points(300), LoyaltyTier::Gold);
        assert_eq!(LoyaltyTier::from_points(499), LoyaltyTier::Gold);
        assert_eq!(LoyaltyTier::from_points(500), LoyaltyTier::Platinum);
        assert_eq!(LoyaltyTier::from_points(10_000), LoyaltyTier::Platinum);
    }

    #[test]
    fn test_discount_rates() {
        assert_eq!(LoyaltyTier::Bronze.discount_rate(), 0.0);
        assert_eq!(LoyaltyTier::Silver.discount_rate(), 0.05);
        assert_eq!(LoyaltyTier::Gold.discount_rate(), 0.10);
        assert_eq!(LoyaltyTier::Platinum.discount_rate(), 0.15);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(LoyaltyTier::Bronze < LoyaltyTier::Silver);
        assert!(LoyaltyTier::Gold < LoyaltyTier::Platinum);
    }

    #[test]
    fn test_access_level_capabilities() {
        let level1 = AccessLevel::new(1).unwrap();
        assert!(!level1.can_view_reports());
        assert!(!level1.can_manage_users());

        let level2 = AccessLevel::new(2).unwrap();
        assert!(level2.can_view_reports());
        assert!(!level2.can_manage_users());

        let level3 = AccessLevel::new(3).unwrap();
        assert!(level3.can_view_reports());
        assert!(level3.can_manage_users());
    }

    #[test]
    fn test_access_level_bounds() {
        assert!(matches!(AccessLevel::new(0), Err(AccountError::InvalidAccessLevel(0))));
        assert!(matches!(AccessLevel::new(4), Err(AccountError::InvalidAccessLevel(4))));
    }
}
