use crate::event_sourcing::JournalError;
use super::value_objects::Role;

// ============================================================================
// Account Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccountError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Name cannot be empty")]
    EmptyDisplayName,

    #[error("Phone number cannot be empty")]
    EmptyPhone,

    #[error("Department cannot be empty")]
    EmptyDepartment,

    #[error("Access level must be between 1 and 3, got {0}")]
    InvalidAccessLevel(i32),

    #[error("Points cannot be negative: {0}")]
    NegativePoints(i64),

    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    #[error("Operation requires a {expected} account, but this is a {actual} account")]
    WrongRole { expected: Role, actual: Role },

    #[error(transparent)]
    Journal(#[from] JournalError),
}
