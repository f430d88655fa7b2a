//! SQLite implementation of [`AddressStore`].
//!
//! [`SqliteStore`] is the session provider: it owns the database path, makes
//! sure the schema exists, and opens one [`Session`] per request. Every write
//! on a session runs in its own transaction.

use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

use addrbook_core::AddressFields;

use crate::error::StorageError;
use crate::traits::AddressStore;
use crate::types::{AddressId, AddressRecord};

/// Provider of per-request SQLite sessions.
///
/// Cheap to clone; holds only the database path.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: String,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path` and applies migrations.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        // The migration connection is dropped right away; sessions open their own.
        let _conn = crate::schema::open_database(path)?;
        Ok(SqliteStore {
            db_path: path.to_string(),
        })
    }

    /// Creates a store backed by a unique temp file (for testing).
    ///
    /// A plain `:memory:` database would be private to one connection, so
    /// sessions could not see each other's writes.
    pub fn in_memory() -> Result<Self, StorageError> {
        let temp_path = std::env::temp_dir()
            .join(format!("addrbook_{}.db", Uuid::new_v4()))
            .to_string_lossy()
            .to_string();
        Self::new(&temp_path)
    }

    /// The database file this store opens sessions against.
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Opens a session scoped to one request.
    ///
    /// The connection closes when the returned [`Session`] is dropped.
    pub fn session(&self) -> Result<Session, StorageError> {
        let conn = crate::schema::open_connection(&self.db_path)?;
        Ok(Session { conn })
    }
}

/// A short-lived handle to the database, owned by a single request.
pub struct Session {
    conn: Connection,
}

impl Session {
    fn row_to_record(row: &Row<'_>) -> rusqlite::Result<AddressRecord> {
        Ok(AddressRecord {
            id: AddressId(row.get(0)?),
            city: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            latitude: row.get(2)?,
            longitude: row.get(3)?,
        })
    }

    fn exists(&self, id: AddressId) -> Result<bool, StorageError> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM address WHERE id = ?1)",
            params![id.0],
            |row| row.get(0),
        )?;
        Ok(exists)
    }
}

impl AddressStore for Session {
    fn list_addresses(&self) -> Result<Vec<AddressRecord>, StorageError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, city, latitude, longitude FROM address ORDER BY id")?;
        let rows = stmt.query_map([], Self::row_to_record)?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    fn get_address(&self, id: AddressId) -> Result<Option<AddressRecord>, StorageError> {
        let record = self
            .conn
            .query_row(
                "SELECT id, city, latitude, longitude FROM address WHERE id = ?1",
                params![id.0],
                Self::row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    fn insert_address(&mut self, fields: &AddressFields) -> Result<AddressId, StorageError> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO address (city, latitude, longitude) VALUES (?1, ?2, ?3)",
            params![fields.city, fields.latitude(), fields.longitude()],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(AddressId(id))
    }

    fn update_address(
        &mut self,
        id: AddressId,
        fields: &AddressFields,
    ) -> Result<(), StorageError> {
        let tx = self.conn.transaction()?;
        let changed = tx.execute(
            "UPDATE address SET city = ?1, latitude = ?2, longitude = ?3 WHERE id = ?4",
            params![fields.city, fields.latitude(), fields.longitude(), id.0],
        )?;
        if changed == 0 {
            return Err(StorageError::AddressNotFound(id.0));
        }
        tx.commit()?;
        Ok(())
    }

    fn delete_address(&mut self, id: AddressId) -> Result<(), StorageError> {
        if !self.exists(id)? {
            return Err(StorageError::AddressNotFound(id.0));
        }
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM address WHERE id = ?1", params![id.0])?;
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, SqliteStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("addresses.db");
        let store = SqliteStore::new(path.to_str().unwrap()).unwrap();
        (dir, store)
    }

    fn delhi() -> AddressFields {
        AddressFields::new("Delhi", 28.7, 77.1).unwrap()
    }

    #[test]
    fn insert_then_list() {
        let (_dir, store) = temp_store();
        let mut session = store.session().unwrap();

        let id = session.insert_address(&delhi()).unwrap();
        let all = session.list_addresses().unwrap();

        assert_eq!(
            all,
            vec![AddressRecord {
                id,
                city: "Delhi".to_string(),
                latitude: 28.7,
                longitude: 77.1,
            }]
        );
    }

    #[test]
    fn writes_visible_across_sessions() {
        let (_dir, store) = temp_store();
        let id = {
            let mut session = store.session().unwrap();
            session.insert_address(&delhi()).unwrap()
        };

        let session = store.session().unwrap();
        let found = session.get_address(id).unwrap().unwrap();
        assert_eq!(found.city, "Delhi");
    }

    #[test]
    fn data_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reopen.db");
        let path = path.to_str().unwrap();

        let id = {
            let store = SqliteStore::new(path).unwrap();
            let mut session = store.session().unwrap();
            session.insert_address(&delhi()).unwrap()
        };

        let store = SqliteStore::new(path).unwrap();
        let session = store.session().unwrap();
        assert!(session.get_address(id).unwrap().is_some());
    }

    #[test]
    fn update_overwrites_all_fields() {
        let (_dir, store) = temp_store();
        let mut session = store.session().unwrap();
        let id = session.insert_address(&delhi()).unwrap();

        let mumbai = AddressFields::new("Mumbai", 19.07, 72.87).unwrap();
        session.update_address(id, &mumbai).unwrap();

        let found = session.get_address(id).unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.city, "Mumbai");
        assert_eq!(found.latitude, 19.07);
        assert_eq!(found.longitude, 72.87);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let (_dir, store) = temp_store();
        let mut session = store.session().unwrap();

        let err = session.update_address(AddressId(42), &delhi()).unwrap_err();
        assert!(matches!(err, StorageError::AddressNotFound(42)));
        assert!(session.list_addresses().unwrap().is_empty());
    }

    #[test]
    fn delete_removes_exactly_one() {
        let (_dir, store) = temp_store();
        let mut session = store.session().unwrap();
        let first = session.insert_address(&delhi()).unwrap();
        let second = session.insert_address(&delhi()).unwrap();

        session.delete_address(first).unwrap();

        assert!(session.get_address(first).unwrap().is_none());
        let remaining = session.list_addresses().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let (_dir, store) = temp_store();
        let mut session = store.session().unwrap();
        let err = session.delete_address(AddressId(7)).unwrap_err();
        assert!(matches!(err, StorageError::AddressNotFound(7)));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let (_dir, store) = temp_store();
        let mut session = store.session().unwrap();
        let first = session.insert_address(&delhi()).unwrap();
        session.delete_address(first).unwrap();

        let second = session.insert_address(&delhi()).unwrap();
        assert!(second > first);
    }

    #[test]
    fn in_memory_store_shares_data_between_sessions() {
        let store = SqliteStore::in_memory().unwrap();
        {
            let mut session = store.session().unwrap();
            session.insert_address(&delhi()).unwrap();
        }
        let session = store.session().unwrap();
        assert_eq!(session.list_addresses().unwrap().len(), 1);
        let _ = std::fs::remove_file(store.path());
    }
}
