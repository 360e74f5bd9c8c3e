// ============================================================================
// Aggregate Root Pattern - Command / Event Core
// ============================================================================
//
// Key Principles:
// 1. Commands are validated before any state changes
// 2. Events represent facts that have already happened
// 3. Aggregates enforce business invariants
// 4. Applying an event never fails validation a second time
//
// This is the GENERIC aggregate trait that works for ANY domain aggregate.
//
// ============================================================================

/// Generic Aggregate trait - command-driven aggregates implement this
///
/// Type Parameters:
/// - `Event`: The domain event type for this aggregate
/// - `Command`: The command type for this aggregate
/// - `Error`: The error type for business rule violations
pub trait Aggregate: Sized {
    type Event: Clone;
    type Command;
    type Error;

    /// Apply an already-validated event to update state
    fn apply_event(&mut self, event: &Self::Event) -> Result<(), Self::Error>;

    /// Handle command and emit events (business logic)
    fn handle_command(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error>;

    /// Get aggregate ID
    fn aggregate_id(&self) -> &str;

    /// Get current version (number of applied events)
    fn version(&self) -> i64;

    /// Handle a command and apply every resulting event.
    ///
    /// Nothing is applied unless the whole command validates, so a failed
    /// command never leaves the aggregate partially updated.
    fn execute(&mut self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let events = self.handle_command(command)?;
        for event in &events {
            self.apply_event(event)?;
        }
        Ok(events)
    }
}
