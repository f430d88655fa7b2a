//! Storage layer for the address book.
//!
//! Provides the [`AddressStore`] trait defining the repository contract, plus
//! the [`SqliteStore`] session provider and the [`InMemoryStore`] backend.
//!
//! # Sessions
//!
//! [`SqliteStore`] is built once at startup and hands out one [`Session`] per
//! request. A session owns its own SQLite connection and closes it when
//! dropped, whichever way the request finishes.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: AddressId, AddressRecord storage-layer types
//! - [`traits`]: AddressStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: migration setup and connection configuration
//! - [`sqlite`]: SqliteStore and Session

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::{Session, SqliteStore};
pub use traits::AddressStore;
pub use types::{AddressId, AddressRecord};
