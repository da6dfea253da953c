//! Error types for the group ledger.

use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur while operating on the ledger.
///
/// Logical conditions (duplicates, not-found, empty-registry queries) are
/// ordinary result values; callers decide how to report them.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to open or read the command script
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// A group with this name is already in the catalog
    #[error("group '{0}' already exists")]
    GroupExists(String),

    /// No group with this name in the catalog
    #[error("no group named '{0}'")]
    GroupNotFound(String),

    /// A member with this name is already in the group
    #[error("member '{0}' already exists")]
    UserExists(String),

    /// No member with this name in the group
    #[error("no member named '{0}'")]
    UserNotFound(String),

    /// Under-paid query against a group with no members
    #[error("group has no members")]
    EmptyRegistry,

    /// Missing command script argument
    #[error("Missing command script argument. Usage: expense-groups <commands.csv> [--summary]")]
    MissingArgument,
}
