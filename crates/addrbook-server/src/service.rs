//! AddressService: the single coordinator between HTTP handlers and storage.
//!
//! All business logic flows through [`AddressService`] and
//! [`find_within_range`]. Handlers are thin wrappers that open a session,
//! delegate here and wrap the result in the response envelope.

use addrbook_core::{meters_to_km, AddressFields, Coordinates, SearchRange};
use addrbook_storage::{AddressId, AddressRecord, AddressStore};

use crate::distance::{DistanceClient, DistanceOutcome};
use crate::error::ApiError;
use crate::schema::addresses::{AddressRequest, AddressView, NearbyAddressView, RangeQuery};

/// Address operations over one storage session.
///
/// Generic over [`AddressStore`] so the same logic runs against a SQLite
/// [`Session`](addrbook_storage::Session) or an
/// [`InMemoryStore`](addrbook_storage::InMemoryStore).
pub struct AddressService<S: AddressStore> {
    store: S,
}

impl<S: AddressStore> AddressService<S> {
    pub fn new(store: S) -> Self {
        AddressService { store }
    }

    /// Every stored address, in storage order.
    pub fn list(&self) -> Result<Vec<AddressView>, ApiError> {
        let records = self.store.list_addresses()?;
        Ok(records.into_iter().map(AddressView::from).collect())
    }

    /// Validates and stores a new address.
    pub fn add(&mut self, req: AddressRequest) -> Result<AddressId, ApiError> {
        let fields = AddressFields::new(req.city, req.latitude, req.longitude)?;
        let id = self.store.insert_address(&fields)?;
        tracing::info!(id = id.0, city = %fields.city, "address added");
        Ok(id)
    }

    /// Overwrites an existing address.
    ///
    /// The id is checked before the coordinates, so an unknown id wins over
    /// bad coordinates.
    pub fn update(&mut self, id: AddressId, req: AddressRequest) -> Result<(), ApiError> {
        if self.store.get_address(id)?.is_none() {
            return Err(ApiError::InvalidAddressId(id.0));
        }
        let fields = AddressFields::new(req.city, req.latitude, req.longitude)?;
        self.store.update_address(id, &fields)?;
        tracing::info!(id = id.0, city = %fields.city, "address updated");
        Ok(())
    }

    /// Removes an existing address.
    pub fn delete(&mut self, id: AddressId) -> Result<(), ApiError> {
        self.store.delete_address(id)?;
        tracing::info!(id = id.0, "address deleted");
        Ok(())
    }

    /// Raw records for the range search.
    pub fn records(&self) -> Result<Vec<AddressRecord>, ApiError> {
        Ok(self.store.list_addresses()?)
    }
}

/// Validates the query point and radius of a range search.
pub fn parse_range_query(query: &RangeQuery) -> Result<(Coordinates, SearchRange), ApiError> {
    let origin = Coordinates::new(query.latitude, query.longitude)?;
    let range = SearchRange::new(query.range)?;
    Ok((origin, range))
}

/// Keeps the records whose travel distance from `origin` is under `range`.
///
/// Queries the collaborator once per record, sequentially, in storage order.
/// A record is skipped when the collaborator reports no distance or the
/// request itself fails; a failed lookup never aborts the search.
pub async fn find_within_range(
    distance: &DistanceClient,
    origin: Coordinates,
    range: SearchRange,
    records: Vec<AddressRecord>,
) -> Vec<NearbyAddressView> {
    let mut found = Vec::new();
    for record in records {
        // Rows are not re-validated on read; a stored point the API can't
        // take is skipped.
        let destination = match Coordinates::new(record.latitude, record.longitude) {
            Ok(destination) => destination,
            Err(err) => {
                tracing::warn!(id = record.id.0, "skipping stored address: {}", err);
                continue;
            }
        };

        match distance.distance(origin, destination).await {
            Ok(DistanceOutcome::Meters(meters)) => {
                if range.contains(meters_to_km(meters)) {
                    found.push(NearbyAddressView::from(record));
                }
            }
            Ok(DistanceOutcome::Unavailable) => {
                tracing::debug!(id = record.id.0, "no distance reported");
            }
            Err(err) => {
                tracing::warn!(id = record.id.0, "distance lookup failed: {}", err);
            }
        }
    }
    found
}
