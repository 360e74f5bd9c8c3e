use serde::{Deserialize, Serialize};

use crate::event_sourcing::Aggregate;
use super::commands::AccountCommand;
use super::errors::AccountError;
use super::events::*;
use super::value_objects::{AccessLevel, Capability, LoyaltyTier, Role};

// ============================================================================
// Account Aggregate - Business Logic
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    phone: String,
    points: u64,
}

impl CustomerProfile {
    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    /// Always derived from points
    pub fn tier(&self) -> LoyaltyTier {
        LoyaltyTier::from_points(self.points)
    }

    pub fn discount_rate(&self) -> f64 {
        self.tier().discount_rate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminProfile {
    department: String,
    access_level: AccessLevel,
}

impl AdminProfile {
    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    pub fn can_view_reports(&self) -> bool {
        self.access_level.can_view_reports()
    }

    pub fn can_manage_users(&self) -> bool {
        self.access_level.can_manage_users()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AccountProfile {
    Customer(CustomerProfile),
    Admin(AdminProfile),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    username: String,
    // Plaintext, compared verbatim
    password: String,
    display_name: String,
    profile: AccountProfile,
    version: i64,
}

impl Account {
    pub fn customer(
        username: &str,
        password: impl Into<String>,
        display_name: &str,
        phone: &str,
    ) -> Result<Self, AccountError> {
        Ok(Self {
            username: validate_username(username)?,
            password: password.into(),
            display_name: non_empty(display_name, AccountError::EmptyDisplayName)?,
            profile: AccountProfile::Customer(CustomerProfile {
                phone: non_empty(phone, AccountError::EmptyPhone)?,
                points: 0,
            }),
            version: 0,
        })
    }

    pub fn admin(
        username: &str,
        password: impl Into<String>,
        display_name: &str,
        department: &str,
        access_level: i32,
    ) -> Result<Self, AccountError> {
        Ok(Self {
            username: validate_username(username)?,
            password: password.into(),
            display_name: non_empty(display_name, AccountError::EmptyDisplayName)?,
            profile: AccountProfile::Admin(AdminProfile {
                department: non_empty(department, AccountError::EmptyDepartment)?,
                access_level: AccessLevel::new(access_level)?,
            }),
            version: 0,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn profile(&self) -> &AccountProfile {
        &self.profile
    }

    pub fn role(&self) -> Role {
        match self.profile {
            AccountProfile::Customer(_) => Role::Customer,
            AccountProfile::Admin(_) => Role::Admin,
        }
    }

    pub fn as_customer(&self) -> Option<&CustomerProfile> {
        match &self.profile {
            AccountProfile::Customer(customer) => Some(customer),
            AccountProfile::Admin(_) => None,
        }
    }

    pub fn as_admin(&self) -> Option<&AdminProfile> {
        match &self.profile {
            AccountProfile::Admin(admin) => Some(admin),
            AccountProfile::Customer(_) => None,
        }
    }

    pub fn authenticate(&self, password: &str) -> bool {
        self.password == password
    }

    pub fn can_view_reports(&self) -> bool {
        self.as_admin().is_some_and(AdminProfile::can_view_reports)
    }

    pub fn can_manage_users(&self) -> bool {
        self.as_admin().is_some_and(AdminProfile::can_manage_users)
    }

    /// Order and menu management need any admin; the rest follow the access level
    pub fn has_capability(&self, capability: Capability) -> bool {
        match capability {
            Capability::ViewReports => self.can_view_reports(),
            Capability::ManageUsers => self.can_manage_users(),
            Capability::ManageOrders | Capability::ManageMenu => self.as_admin().is_some(),
        }
    }

    /// Continue an existing journal stream, e.g. when a removed username is
    /// registered again
    pub(crate) fn resume_from(&mut self, version: i64) {
        self.version = version;
    }

    /// Accrue loyalty points; returns the events that were applied
    pub fn add_points(&mut self, delta: i64) -> Result<Vec<AccountEvent>, AccountError> {
        self.execute(&AccountCommand::AddPoints { delta })
    }

    /// One-line summary whose tail depends on the role
    pub fn info(&self) -> String {
        let base = format!(
            "Username: {} | Name: {} | Role: {}",
            self.username, self.display_name, self.role()
        );
        match &self.profile {
            AccountProfile::Admin(admin) => format!(
                "{} | Department: {} | Access Level: {}",
                base,
                admin.department,
                admin.access_level.level()
            ),
            AccountProfile::Customer(customer) => format!(
                "{} | Phone: {} | Points: {} | Tier: {}",
                base,
                customer.phone,
                customer.points,
                customer.tier()
            ),
        }
    }

    fn require_customer(&self) -> Result<&CustomerProfile, AccountError> {
        self.as_customer().ok_or(AccountError::WrongRole {
            expected: Role::Customer,
            actual: self.role(),
        })
    }

    fn require_admin(&self) -> Result<&AdminProfile, AccountError> {
        self.as_admin().ok_or(AccountError::WrongRole {
            expected: Role::Admin,
            actual: self.role(),
        })
    }

    fn customer_mut(&mut self) -> Result<&mut CustomerProfile, AccountError> {
        let actual = self.role();
        match &mut self.profile {
            AccountProfile::Customer(customer) => Ok(customer),
            AccountProfile::Admin(_) => Err(AccountError::WrongRole { expected: Role::Customer, actual }),
        }
    }

    fn admin_mut(&mut self) -> Result<&mut AdminProfile, AccountError> {
        let actual = self.role();
        match &mut self.profile {
            AccountProfile::Admin(admin) => Ok(admin),
            AccountProfile::Customer(_) => Err(AccountError::WrongRole { expected: Role::Admin, actual }),
        }
    }
}

impl Aggregate for Account {
    type Event = AccountEvent;
    type Command = AccountCommand;
    type Error = AccountError;

    fn apply_event(&mut self, event: &Self::Event) -> Result<(), Self::Error> {
        match event {
            AccountEvent::Registered(_) | AccountEvent::Removed => {
                // Registry bookkeeping only
            }
            AccountEvent::PointsAdded(e) => {
                self.customer_mut()?.points = e.total;
            }
            AccountEvent::TierChanged(_) => {
                // Tier is derived from points
            }
            AccountEvent::PhoneChanged(e) => {
                self.customer_mut()?.phone = e.phone.clone();
            }
            AccountEvent::DepartmentChanged(e) => {
                self.admin_mut()?.department = e.department.clone();
            }
            AccountEvent::AccessLevelChanged(e) => {
                self.admin_mut()?.access_level = AccessLevel::new(i32::from(e.to))?;
            }
        }

        self.version += 1;
        Ok(())
    }

    fn handle_command(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            AccountCommand::AddPoints { delta } => {
                let customer = self.require_customer()?;
                if *delta < 0 {
                    return Err(AccountError::NegativePoints(*delta));
                }
                if *delta == 0 {
                    return Ok(vec![]); // No change
                }

                let delta = delta.unsigned_abs();
                let total = customer.points.saturating_add(delta);
                let mut events = vec![AccountEvent::PointsAdded(AccountPointsAdded { delta, total })];

                let from = customer.tier();
                let to = LoyaltyTier::from_points(total);
                if from != to {
                    events.push(AccountEvent::TierChanged(AccountTierChanged { from, to }));
                }

                Ok(events)
            }

            AccountCommand::ChangePhone { phone } => {
                self.require_customer()?;
                Ok(vec![AccountEvent::PhoneChanged(AccountPhoneChanged {
                    phone: non_empty(phone, AccountError::EmptyPhone)?,
                })])
            }

            AccountCommand::ChangeDepartment { department } => {
                self.require_admin()?;
                Ok(vec![AccountEvent::DepartmentChanged(AccountDepartmentChanged {
                    department: non_empty(department, AccountError::EmptyDepartment)?,
                })])
            }

            AccountCommand::ChangeAccessLevel { level } => {
                let admin = self.require_admin()?;
                let next = AccessLevel::new(*level)?;
                if next == admin.access_level {
                    return Ok(vec![]);
                }

                Ok(vec![AccountEvent::AccessLevelChanged(AccountAccessLevelChanged {
                    from: admin.access_level.level(),
                    to: next.level(),
                })])
            }
        }
    }

    fn aggregate_id(&self) -> &str {
        &self.username
    }

    fn version(&self) -> i64 {
        self.version
    }
}

fn validate_username(username: &str) -> Result<String, AccountError> {
    if username.trim().is_empty() {
        return Err(AccountError::EmptyUsername);
    }
    Ok(username.to_string())
}

fn non_empty(value: &str, error: AccountError) -> Result<String, AccountError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// Unit Tests
// ============================================================================
