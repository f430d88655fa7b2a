//! Storage-layer types for address identity and stored rows.
//!
//! [`AddressId`] is defined here (not in addrbook-core) because identity is a
//! storage concern: an address only gains an ID when persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a stored address.
///
/// The inner `i64` aligns with SQLite's `INTEGER PRIMARY KEY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressId(pub i64);

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddressId({})", self.0)
    }
}

/// One stored address row.
///
/// Coordinates are kept as raw floats: bounds are enforced at write time
/// only, so rows are read back as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub id: AddressId,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}
