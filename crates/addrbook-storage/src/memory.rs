//! In-memory implementation of [`AddressStore`].
//!
//! [`InMemoryStore`] is a backend for tests and anywhere persistence isn't
//! needed. It mirrors the SQLite backend's semantics, including ids that are
//! never reused after a delete.

use std::collections::BTreeMap;

use addrbook_core::AddressFields;

use crate::error::StorageError;
use crate::traits::AddressStore;
use crate::types::{AddressId, AddressRecord};

/// Address records kept in a `BTreeMap` so listing follows id order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: BTreeMap<AddressId, AddressRecord>,
    /// Last id handed out; only ever grows.
    last_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AddressStore for InMemoryStore {
    fn list_addresses(&self) -> Result<Vec<AddressRecord>, StorageError> {
        Ok(self.records.values().cloned().collect())
    }

    fn get_address(&self, id: AddressId) -> Result<Option<AddressRecord>, StorageError> {
        Ok(self.records.get(&id).cloned())
    }

    fn insert_address(&mut self, fields: &AddressFields) -> Result<AddressId, StorageError> {
        self.last_id += 1;
        let id = AddressId(self.last_id);
        self.records.insert(
            id,
            AddressRecord {
                id,
                city: fields.city.clone(),
                latitude: fields.latitude(),
                longitude: fields.longitude(),
            },
        );
        Ok(id)
    }

    fn update_address(
        &mut self,
        id: AddressId,
        fields: &AddressFields,
    ) -> Result<(), StorageError> {
        let record = self
            .records
            .get_mut(&id)
            .ok_or(StorageError::AddressNotFound(id.0))?;
        record.city = fields.city.clone();
        record.latitude = fields.latitude();
        record.longitude = fields.longitude();
        Ok(())
    }

    fn delete_address(&mut self, id: AddressId) -> Result<(), StorageError> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::AddressNotFound(id.0))
    }
}
