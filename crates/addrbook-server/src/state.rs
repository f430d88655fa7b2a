//! Application state shared by all handlers.
//!
//! [`AppState`] holds the storage session provider and the distance client.
//! Both are cheap to clone and safe to share; a fresh storage session is
//! opened for each request through [`AppState::service`].

use addrbook_storage::{Session, SqliteStore};

use crate::distance::{DistanceClient, DistanceConfig};
use crate::error::ApiError;
use crate::service::AddressService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Per-request session provider.
    pub store: SqliteStore,
    /// Client for the distance matrix collaborator.
    pub distance: DistanceClient,
}

impl AppState {
    /// Creates a new `AppState` backed by the SQLite database at `db_path`.
    pub fn new(db_path: &str, distance: DistanceConfig) -> Result<Self, ApiError> {
        let store = SqliteStore::new(db_path)
            .map_err(|e| ApiError::InternalError(format!("failed to open database: {}", e)))?;
        Self::with_store(store, distance)
    }

    /// Creates a new `AppState` with a throwaway database (for testing).
    pub fn in_memory(distance: DistanceConfig) -> Result<Self, ApiError> {
        let store = SqliteStore::in_memory()
            .map_err(|e| ApiError::InternalError(format!("failed to open database: {}", e)))?;
        Self::with_store(store, distance)
    }

    fn with_store(store: SqliteStore, distance: DistanceConfig) -> Result<Self, ApiError> {
        let distance = DistanceClient::new(distance).map_err(|e| {
            ApiError::InternalError(format!("failed to build distance client: {}", e))
        })?;
        Ok(AppState { store, distance })
    }

    /// Opens a storage session for one request.
    ///
    /// The session closes when the returned service is dropped.
    pub fn service(&self) -> Result<AddressService<Session>, ApiError> {
        Ok(AddressService::new(self.store.session()?))
    }
}
