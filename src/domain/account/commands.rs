// ============================================================================
// Account Domain Commands
// ============================================================================

#[derive(Debug, Clone)]
pub enum AccountCommand {
    /// Customer only
    AddPoints {
        delta: i64,
    },
    /// Customer only
    ChangePhone {
        phone: String,
    },
    /// Admin only
    ChangeDepartment {
        department: String,
    },
    /// Admin only
    ChangeAccessLevel {
        level: i32,
    },
}
