//! Storage error types for addrbook-storage.
//!
//! [`StorageError`] covers the failure modes of the storage layer: SQLite
//! errors, migration failures and missing records.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An underlying SQLite call failed.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// No address with the given ID exists.
    #[error("address not found: {0}")]
    AddressNotFound(i64),
}
