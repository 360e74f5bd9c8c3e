use std::collections::BTreeMap;

use crate::domain::account::{Account, AccountCommand, AccountError, AccountEvent, AccountRegistered};
use crate::event_sourcing::{Aggregate, EventStore};

// ============================================================================
// Account Registry - Command Handler for Accounts
// ============================================================================
//
// Orchestrates: Command → Account → Events → Journal
//
// Usernames are unique. Iteration is ordered by username.
//
// ============================================================================

#[derive(Debug)]
pub struct AccountRegistry {
    accounts: BTreeMap<String, Account>,
    journal: EventStore<AccountEvent>,
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
            journal: EventStore::new("Account"),
        }
    }

    pub fn register_customer(
        &mut self,
        username: &str,
        password: &str,
        display_name: &str,
        phone: &str,
    ) -> Result<&Account, AccountError> {
        let account = Account::customer(username, password, display_name, phone)?;
        self.register(account, None)
    }

    pub fn register_admin(
        &mut self,
        username: &str,
        password: &str,
        display_name: &str,
        department: &str,
        access_level: i32,
        actor: Option<&str>,
    ) -> Result<&Account, AccountError> {
        let account = Account::admin(username, password, display_name, department, access_level)?;
        self.register(account, actor)
    }

    fn register(&mut self, mut account: Account, actor: Option<&str>) -> Result<&Account, AccountError> {
        let username = account.aggregate_id().to_string();
        if self.accounts.contains_key(&username) {
            return Err(AccountError::DuplicateUsername(username));
        }

        // Removed usernames may be registered again; their stream continues
        account.resume_from(self.journal.current_version(&username));

        let event = AccountEvent::Registered(AccountRegistered {
            role: account.role(),
            display_name: account.display_name().to_string(),
        });
        self.journal
            .append_events(&username, account.version(), vec![event.clone()], actor)?;
        account.apply_event(&event)?;

        tracing::info!(username = %username, role = %account.role(), "Account registered");
        Ok(self.accounts.entry(username).or_insert(account))
    }

    pub fn find(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    /// Accounts ordered by username
    pub fn list(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Returns the account only when the password matches
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&Account> {
        self.accounts
            .get(username)
            .filter(|account| account.authenticate(password))
    }

    /// Remove by username. `Ok(false)` if there is no such account.
    pub fn remove(&mut self, username: &str, actor: Option<&str>) -> Result<bool, AccountError> {
        let Some(account) = self.accounts.get(username) else {
            return Ok(false);
        };

        self.journal
            .append_events(username, account.version(), vec![AccountEvent::Removed], actor)?;
        self.accounts.remove(username);
        tracing::info!(username, "Account removed");
        Ok(true)
    }

    /// Run a command against one account.
    ///
    /// `Ok(None)` when the username is unknown. Events are journaled against
    /// the account's own version before they are applied, so a stale account
    /// is rejected with a version conflict and left unchanged.
    pub fn execute(
        &mut self,
        username: &str,
        command: &AccountCommand,
        actor: Option<&str>,
    ) -> Result<Option<Vec<AccountEvent>>, AccountError> {
        let Some(account) = self.accounts.get_mut(username) else {
            return Ok(None);
        };

        let events = account.handle_command(command)?;
        if events.is_empty() {
            return Ok(Some(events));
        }

        self.journal
            .append_events(username, account.version(), events.clone(), actor)?;
        for event in &events {
            account.apply_event(event)?;
        }
        Ok(Some(events))
    }

    pub fn add_points(&mut self, username: &str, delta: i64) -> Result<Option<Vec<AccountEvent>>, AccountError> {
        self.execute(username, &AccountCommand::AddPoints { delta }, None)
    }

    pub fn journal(&self) -> &EventStore<AccountEvent> {
        &self.journal
    }
}
