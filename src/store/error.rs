//! Store error types
//!
//! Defines all errors that can occur in the persistence layer.

use thiserror::Error;

/// Errors that can occur in the chat store
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed (creating the database directory, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// SQLite reported an error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A username is already registered
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    /// Password hashing or hash parsing failed
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// Lock acquisition failed
    #[error("Lock error: {0}")]
    Lock(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
