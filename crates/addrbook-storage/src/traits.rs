//! The [`AddressStore`] trait defining the repository contract.
//!
//! Both backends ([`Session`](crate::Session) over SQLite and
//! [`InMemoryStore`](crate::InMemoryStore)) implement it, so the service
//! logic is written once against the trait.

use addrbook_core::AddressFields;

use crate::error::StorageError;
use crate::types::{AddressId, AddressRecord};

/// The storage contract for address records.
///
/// The trait is synchronous: a session is used by exactly one request and
/// never held across an await point.
pub trait AddressStore {
    /// Lists every stored address in storage order (ascending id).
    fn list_addresses(&self) -> Result<Vec<AddressRecord>, StorageError>;

    /// Looks up a single address. `Ok(None)` if it does not exist.
    fn get_address(&self, id: AddressId) -> Result<Option<AddressRecord>, StorageError>;

    /// Persists a new address and returns its freshly allocated id.
    fn insert_address(&mut self, fields: &AddressFields) -> Result<AddressId, StorageError>;

    /// Overwrites city, latitude and longitude of an existing address.
    ///
    /// Returns [`StorageError::AddressNotFound`] if `id` is unknown.
    fn update_address(
        &mut self,
        id: AddressId,
        fields: &AddressFields,
    ) -> Result<(), StorageError>;

    /// Deletes an existing address.
    ///
    /// Returns [`StorageError::AddressNotFound`] if `id` is unknown.
    fn delete_address(&mut self, id: AddressId) -> Result<(), StorageError>;
}
