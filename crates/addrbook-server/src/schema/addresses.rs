//! Address request/response types.

use serde::{Deserialize, Serialize};

use addrbook_storage::{AddressId, AddressRecord};

use super::common::STATUS_SUCCESS;

/// Body of `POST /add_address` and `PUT /update_address`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressRequest {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// `?id=` query of the update and delete endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AddressIdQuery {
    pub id: i64,
}

/// Query of `GET /get_address_within_range`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RangeQuery {
    /// Radius in kilometers.
    pub range: i64,
    pub latitude: f64,
    pub longitude: f64,
}

/// One stored address as listed by `GET /get_all_address`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressView {
    pub id: AddressId,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<AddressRecord> for AddressView {
    fn from(record: AddressRecord) -> Self {
        AddressView {
            id: record.id,
            city: record.city,
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

/// An address found by the range search (no id).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyAddressView {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<AddressRecord> for NearbyAddressView {
    fn from(record: AddressRecord) -> Self {
        NearbyAddressView {
            city: record.city,
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

/// `{data, status}` body of a successful range search.
#[derive(Debug, Clone, Serialize)]
pub struct RangeResponse {
    pub data: Vec<NearbyAddressView>,
    pub status: u16,
}

impl RangeResponse {
    pub fn new(data: Vec<NearbyAddressView>) -> Self {
        RangeResponse {
            data,
            status: STATUS_SUCCESS,
        }
    }
}
